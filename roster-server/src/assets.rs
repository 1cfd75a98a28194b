//! Front-end files compiled into the binary, served under `/static` when no
//! static directory is configured.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

const INDEX_HTML: &str = include_str!("../static/index.html");
const APP_JS: &str = include_str!("../static/app.js");
const STYLES_CSS: &str = include_str!("../static/styles.css");

/// `GET /static/:file` for the bundled assets.
pub async fn bundled(Path(file): Path<String>) -> Response {
    let (content_type, body) = match file.as_str() {
        "index.html" => ("text/html; charset=utf-8", INDEX_HTML),
        "app.js" => ("text/javascript; charset=utf-8", APP_JS),
        "styles.css" => ("text/css; charset=utf-8", STYLES_CSS),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}
