//! API route configuration.

use crate::api::handlers::{
    create_handler, delete_handler, list_handler, retrieve_handler, update_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// Paths are registered in full rather than nested so the collection keeps
/// its trailing slash.
///
/// # Endpoints
///
/// - `GET    /api/`      - List all URLs
/// - `POST   /api/`      - Shorten a URL (form field `url`)
/// - `GET    /api/{id}`  - Retrieve a URL
/// - `PUT    /api/{id}`  - Replace a URL (form field `url`)
/// - `DELETE /api/{id}`  - Delete a URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(list_handler).post(create_handler))
        .route(
            "/api/{id}",
            get(retrieve_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
}
