//! Admin endpoints: the visit counter page and its reset.

use tracing::info;

use crate::response::ContentType;
use crate::{Request, Response};

/// `GET /admin/metrics` — HTML page showing the visit count.
pub async fn metrics(req: Request) -> Response {
    let hits = req.state().hits();
    let page = format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    \
         <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>\n"
    );
    Response::builder().bytes(ContentType::Html, page.into_bytes())
}

/// `POST /admin/reset` — zeroes the visit counter.
pub async fn reset(req: Request) -> Response {
    req.state().reset_hits();
    info!("visit counter reset");
    Response::text("OK")
}
