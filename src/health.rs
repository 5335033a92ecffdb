//! Health-check handler.
//!
//! If the process can answer HTTP at all it is ready; there are no
//! downstream dependencies to gate on.

use crate::{Request, Response};

/// `GET /api/healthz` — `200 OK`, `text/plain; charset=utf-8`, body `"OK"`.
pub async fn readiness(_req: Request) -> Response {
    Response::text("OK")
}
