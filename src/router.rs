//! Radix-tree request router and the per-request pipeline.
//!
//! One tree per HTTP method, O(path-length) lookup. [`Router::handle`] is the
//! whole life of a request after hyper has parsed its head:
//!
//! ```text
//! count hit ─▶ read body ─┬─ too large / broken ─────────▶ ApiError ────┐
//!                         └─ lookup ─┬─ miss ────────▶ ApiError::NotFound┤
//!                                    └─ spawn handler ─┬─ response ──────┤
//!                                                      └─ panic ─▶ Internal
//!                                                                        ▼
//!                                                        log non-OK ─▶ response
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use hyper::body::Body;
use matchit::Router as MatchitRouter;
use tracing::{Instrument, info_span};

use crate::error::{ApiError, BoxError};
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware;
use crate::request::{Request, read_body};
use crate::response::{IntoResponse, Response};
use crate::state::AppState;

/// The application router.
///
/// Owns the shared [`AppState`]; every dispatched [`Request`] carries a
/// handle to it. Build once at startup, pass to [`Server::serve`](crate::Server::serve).
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    state: Arc<AppState>,
}

impl Router {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { routes: HashMap::new(), state }
    }

    pub fn state(&self) -> &Arc<AppState> { &self.state }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting route pattern. Routes are fixed at
    /// startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Runs one request through the pipeline. Always yields exactly one
    /// response, whatever fails along the way.
    pub async fn handle<B>(
        &self,
        method: &str,
        path: &str,
        headers: Vec<(String, String)>,
        body: B,
    ) -> Response
    where
        B: Body<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let span = info_span!("request", %method, %path);
        async {
            middleware::count_hit(&self.state, path);
            let response = match read_body(body).await {
                Ok(body) => self.route(method, path, headers, body).await,
                Err(e) => e.into_response(),
            };
            middleware::log_response(method, path, response.status_code());
            response
        }
        .instrument(span)
        .await
    }

    async fn route(
        &self,
        method: &str,
        path: &str,
        headers: Vec<(String, String)>,
        body: Bytes,
    ) -> Response {
        let found = method.parse::<Method>().ok().and_then(|m| self.lookup(m, path));
        let Some((handler, params)) = found else {
            return ApiError::NotFound(format!("Cannot {method} {path}")).into_response();
        };

        let req = Request::new(
            method.to_owned(),
            path.to_owned(),
            headers,
            body,
            params,
            Arc::clone(&self.state),
        );

        // A panic inside the handler unwinds its own task only; the join
        // error is classified like any other internal failure.
        match tokio::spawn(handler.call(req).in_current_span()).await {
            Ok(response) => response,
            Err(e) => ApiError::internal(format!("handler failed: {e}")).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::Full;

    use super::*;
    use crate::Status;
    use crate::request::MAX_BODY_BYTES;

    async fn hello(req: Request) -> Response {
        Response::text(format!("hello {}", req.param("name").unwrap_or("?")))
    }

    async fn boom(_req: Request) -> Response {
        panic!("handler exploded");
    }

    fn router() -> Router {
        Router::new(Arc::new(AppState::default()))
            .on(Method::Get, "/hello/{name}", hello)
            .on(Method::Get, "/boom", boom)
            .on(Method::Delete, "/gone", |_req: Request| async { Status::NoContent })
    }

    async fn call(router: &Router, method: &str, path: &str) -> Response {
        router.handle(method, path, Vec::new(), Full::new(Bytes::new())).await
    }

    #[tokio::test]
    async fn routes_by_method_and_path() {
        let router = router();
        let res = call(&router, "GET", "/hello/chirpy").await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"hello chirpy");

        assert_eq!(call(&router, "DELETE", "/gone").await.status_code(), 204);
    }

    #[tokio::test]
    async fn unknown_route_is_a_json_404() {
        let router = router();
        for (method, path) in [("GET", "/nope"), ("POST", "/hello/x"), ("BREW", "/hello/x")] {
            let res = call(&router, method, path).await;
            assert_eq!(res.status_code(), 404);
            let json: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
            assert_eq!(json["error"], format!("Cannot {method} {path}"));
        }
    }

    #[tokio::test]
    async fn panicking_handler_becomes_one_500() {
        let router = router();
        let res = call(&router, "GET", "/boom").await;
        assert_eq!(res.status_code(), 500);
        assert_eq!(res.body(), br#"{"error":"Something went wrong on our end"}"#);

        // the router keeps serving afterwards
        assert_eq!(call(&router, "GET", "/hello/again").await.status_code(), 200);
    }

    #[tokio::test]
    async fn every_request_is_counted() {
        let router = router();
        call(&router, "GET", "/hello/a").await;
        call(&router, "GET", "/nope").await;
        assert_eq!(router.state().hits(), 2);
    }

    #[tokio::test]
    async fn oversized_body_is_a_counted_413() {
        let router = router();
        let body = Full::new(Bytes::from(vec![b'a'; MAX_BODY_BYTES + 1]));
        let res = router.handle("GET", "/hello/big", Vec::new(), body).await;
        assert_eq!(res.status_code(), 413);
        let json: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(json["error"], format!("Request body too large. Max size is {MAX_BODY_BYTES} bytes"));
        assert_eq!(router.state().hits(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::new(Arc::new(AppState::default()))
            .on(Method::Get, "/a/{x}", hello)
            .on(Method::Get, "/a/{y}", hello);
    }
}
