//! Visit counter feeding the admin metrics page.

use crate::state::AppState;

/// The metrics page itself is not a visit.
pub const METRICS_PATH: &str = "/admin/metrics";

/// Counts every request except those aimed at the metrics page, whatever
/// their method.
pub fn count_hit(state: &AppState, path: &str) {
    if path == METRICS_PATH {
        return;
    }
    state.record_hit();
}
