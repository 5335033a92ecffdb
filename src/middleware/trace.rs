use tracing::{debug, warn};

/// Logs every response that is not `200 OK`.
pub fn log_response(method: &str, path: &str, status: u16) {
    if status == 200 {
        debug!(status, "request completed");
    } else {
        warn!(%method, %path, status, "[NON-OK] response");
    }
}
