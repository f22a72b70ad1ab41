//! Court catalog endpoint.

use axum::Json;
use juris_core::courts::{Court, catalog};

/// `GET /api/courts` — the six courts in display order.
pub async fn list_courts_handler() -> Json<&'static [Court]> {
    Json(catalog())
}
