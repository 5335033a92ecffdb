//! Error types.
//!
//! Two families, kept apart on purpose:
//!
//! - [`Error`] — infrastructure failures: bad configuration, binding to a
//!   port. These stop the process; they never become HTTP responses.
//! - [`ApiError`] — everything a request can fail with. Handlers return it,
//!   and its [`IntoResponse`] impl is the one place that decides status code
//!   and body for every failure.

use serde::Serialize;
use tracing::error;

use crate::response::{IntoResponse, Json};
use crate::status::Status;
use crate::validate::Rejection;

/// Body sent for every `500`. The real cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong on our end";

/// The error type returned by startup and serving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}

/// Boxed cause carried by [`ApiError::Internal`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A classified request failure.
///
/// Each client-facing variant owns the message sent back as
/// `{"error": <message>}`. `Internal` owns the original cause instead, which
/// is logged when the response is built and never leaves the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("internal: {0}")]
    Internal(#[source] BoxError),
}

impl ApiError {
    pub fn internal(cause: impl Into<BoxError>) -> Self {
        Self::Internal(cause.into())
    }

    pub fn status(&self) -> Status {
        match self {
            Self::BadRequest(_)      => Status::BadRequest,
            Self::Unauthorized(_)    => Status::Unauthorized,
            Self::Forbidden(_)       => Status::Forbidden,
            Self::NotFound(_)        => Status::NotFound,
            Self::PayloadTooLarge(_) => Status::ContentTooLarge,
            Self::Internal(_)        => Status::InternalServerError,
        }
    }
}

impl From<Rejection> for ApiError {
    fn from(reason: Rejection) -> Self {
        Self::BadRequest(reason.message())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> crate::Response {
        let status = self.status();
        let message = match &self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::PayloadTooLarge(msg) => msg.as_str(),
            Self::Internal(cause) => {
                error!(cause = %cause, "internal error");
                INTERNAL_ERROR_MESSAGE
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(err: ApiError) -> (u16, serde_json::Value) {
        let res = err.into_response();
        let json = serde_json::from_slice(res.body()).unwrap();
        (res.status_code(), json)
    }

    #[test]
    fn client_errors_carry_their_own_message() {
        let cases = [
            (ApiError::BadRequest("bad".into()), 400, "bad"),
            (ApiError::Unauthorized("who".into()), 401, "who"),
            (ApiError::Forbidden("no".into()), 403, "no"),
            (ApiError::NotFound("gone".into()), 404, "gone"),
            (ApiError::PayloadTooLarge("big".into()), 413, "big"),
        ];
        for (err, status, message) in cases {
            assert_eq!(body(err), (status, serde_json::json!({ "error": message })));
        }
    }

    #[test]
    fn internal_hides_the_cause() {
        let err = ApiError::internal("db password is hunter2");
        let (status, json) = body(err);
        assert_eq!(status, 500);
        assert_eq!(json, serde_json::json!({ "error": "Something went wrong on our end" }));
    }

    #[test]
    fn internal_keeps_the_cause_as_source() {
        let io = std::io::Error::other("disk on fire");
        let err = ApiError::internal(io);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn too_long_rejection_is_a_bad_request() {
        let err = ApiError::from(Rejection::TooLong { max_length: 140 });
        assert_eq!(
            body(err),
            (400, serde_json::json!({ "error": "Chirp is too long. Max length is 140" })),
        );
    }

    #[test]
    fn malformed_rejection_is_a_bad_request() {
        let (status, _) = body(Rejection::Malformed.into());
        assert_eq!(status, 400);
    }
}
