//! Route table for the Chirpy service.

mod admin;
mod chirps;
mod users;

use std::sync::Arc;

use crate::middleware::METRICS_PATH;
use crate::{Method, Router, health};
use crate::state::AppState;

pub use admin::{metrics, reset};
pub use chirps::{create_chirp, list_chirps, validate_chirp};
pub use users::create_user;

/// Builds the router with every Chirpy endpoint registered.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new(state)
        .on(Method::Get,  "/api/healthz",        health::readiness)
        .on(Method::Get,  METRICS_PATH,          metrics)
        .on(Method::Post, "/admin/reset",        reset)
        .on(Method::Post, "/api/validate_chirp", validate_chirp)
        .on(Method::Post, "/api/users",          create_user)
        .on(Method::Get,  "/api/chirps",         list_chirps)
        .on(Method::Post, "/api/chirps",         create_chirp)
}
