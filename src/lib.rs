//! # chirpy
//!
//! A small HTTP backend for short messages ("chirps"): health check, admin
//! visit counter, users, and a moderation pipeline that redacts banned words
//! and enforces a length limit.
//!
//! ## Request flow
//!
//! ```text
//! hyper ─▶ Router::handle ─▶ handler ─▶ validate() ─┬─ Accepted ─▶ 200 / 201 JSON
//!                                                   └─ Rejected ─▶ ApiError ─┐
//!          any other failure, panics included ─────────▶ ApiError::Internal ─┤
//!                                                                            ▼
//!                                                    {"error": "..."} + status
//! ```
//!
//! Handlers never format error responses themselves. They return
//! `Result<_, ApiError>`, and [`ApiError`]'s [`IntoResponse`] impl is the one
//! place that maps a failure to a status code and body.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chirpy::{AppState, Config, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chirpy::Error> {
//!     let config = Config::from_env()?;
//!     let app = api::router(Arc::new(AppState::default()));
//!     Server::bind(config.addr).serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod state;
mod status;

pub mod api;
pub mod config;
pub mod health;
pub mod middleware;
pub mod store;
pub mod validate;

pub use config::Config;
pub use error::{ApiError, BoxError, Error, INTERNAL_ERROR_MESSAGE};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_with_shutdown};
pub use state::AppState;
pub use status::Status;
