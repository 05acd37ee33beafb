//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::StorageError;
use crate::state::AppState;

/// Redirects a short ID to its stored URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// This path is visited by browsers, so it answers in plain text instead of
/// the JSON envelope:
///
/// - **302 Found**: `Location` and body both carry the stored URL
/// - **404 Not Found**: body `not found`
pub async fn redirect_handler(Path(id): Path<String>, State(state): State<AppState>) -> Response {
    match state.store.view(&id) {
        Ok(entity) => {
            debug!(id = %entity.id, views = entity.views, "Redirecting");
            (
                StatusCode::FOUND,
                [(header::LOCATION, entity.url.clone())],
                entity.url,
            )
                .into_response()
        }
        Err(StorageError::NotFound) => (StatusCode::NOT_FOUND, "not found").into_response(),
        Err(e) => {
            error!(id = %id, error = %e, "Unexpected storage error on redirect");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
