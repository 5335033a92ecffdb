//! Incoming HTTP request type.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, BoxError};
use crate::state::AppState;
use crate::validate::Rejection;

/// An incoming HTTP request with its body fully buffered.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
    pub(crate) state: Arc<AppState>,
}

impl Request {
    pub(crate) fn new(
        method: String,
        path: String,
        headers: Vec<(String, String)>,
        body: Bytes,
        params: HashMap<String, String>,
        state: Arc<AppState>,
    ) -> Self {
        Self { method, path, headers, body, params, state }
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Shared application state.
    pub fn state(&self) -> &AppState { &self.state }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/chirps/{id}`, `req.param("id")` on `/api/chirps/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Decodes the body as JSON.
    ///
    /// Any mismatch (invalid JSON, missing field, wrong type) is a
    /// [`Rejection::Malformed`]; the serde detail is only logged.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            debug!(error = %e, "rejected request body");
            Rejection::Malformed.into()
        })
    }
}

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Buffers a request body, refusing anything over [`MAX_BODY_BYTES`].
///
/// Going over the limit is the client's fault (`413`); any other read
/// failure is internal.
pub(crate) async fn read_body<B>(body: B) -> Result<Bytes, ApiError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(ApiError::PayloadTooLarge(format!(
            "Request body too large. Max size is {MAX_BODY_BYTES} bytes"
        ))),
        Err(e) => Err(ApiError::Internal(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use http_body_util::Full;
    use hyper::body::Frame;
    use serde::Deserialize;

    use super::*;

    /// A body whose connection dies before the first frame.
    struct BrokenBody;

    impl Body for BrokenBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Bytes>, Self::Error>>> {
            Poll::Ready(Some(Err(std::io::Error::other("connection reset"))))
        }
    }

    fn request(body: &'static [u8]) -> Request {
        Request::new(
            "POST".into(),
            "/api/validate_chirp".into(),
            vec![("Content-Type".into(), "application/json".into())],
            Bytes::from_static(body),
            HashMap::new(),
            Arc::new(AppState::default()),
        )
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        body: String,
    }

    #[test]
    fn header_lookup_ignores_case() {
        assert_eq!(request(b"").header("content-type"), Some("application/json"));
    }

    #[test]
    fn json_decodes_a_valid_body() {
        let payload: Payload = request(br#"{"body":"hi"}"#).json().unwrap();
        assert_eq!(payload.body, "hi");
    }

    #[test]
    fn json_rejects_bad_shapes_as_bad_request() {
        for raw in [&b""[..], b"not json", b"{}", br#"{"body":5}"#, br#"{"body":null}"#] {
            let req = Request { body: Bytes::copy_from_slice(raw), ..request(b"") };
            let err = req.json::<Payload>().unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Invalid request body"), "{raw:?}");
        }
    }

    #[tokio::test]
    async fn body_at_the_limit_is_read() {
        let bytes = read_body(Full::new(Bytes::from(vec![b'a'; MAX_BODY_BYTES]))).await.unwrap();
        assert_eq!(bytes.len(), MAX_BODY_BYTES);
    }

    #[tokio::test]
    async fn body_over_the_limit_is_too_large() {
        let err = read_body(Full::new(Bytes::from(vec![b'a'; MAX_BODY_BYTES + 1]))).await.unwrap_err();
        assert!(matches!(err, ApiError::PayloadTooLarge(_)), "{err:?}");
    }

    #[tokio::test]
    async fn broken_body_is_internal() {
        let err = read_body(BrokenBody).await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)), "{err:?}");
    }
}
