//! Chirpy server binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/api/healthz
//!   curl -X POST http://localhost:8080/api/validate_chirp \
//!        -H 'content-type: application/json' \
//!        -d '{"body":"This is a kerfuffle opinion"}'
//!   curl http://localhost:8080/admin/metrics

use std::sync::Arc;

use chirpy::validate::ValidationPolicy;
use chirpy::{AppState, Config, Server, api};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), chirpy::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let policy = ValidationPolicy::default();
    info!(max_length = policy.max_length(), "moderation policy loaded");

    let app = api::router(Arc::new(AppState::new(policy)));
    Server::bind(config.addr).serve(app).await
}
