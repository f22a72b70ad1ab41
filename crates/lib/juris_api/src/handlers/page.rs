//! Chat page.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// `GET /` — the single-page chat UI. State transitions run in the wasm bundle
/// served under `/pkg`.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
