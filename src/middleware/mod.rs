//! Cross-cutting request hooks.
//!
//! Both run inside the per-request span opened by
//! [`Router::handle`](crate::Router::handle): one before routing, one after
//! the response exists.

mod hits;
mod trace;

pub use hits::{METRICS_PATH, count_hit};
pub use trace::log_response;
