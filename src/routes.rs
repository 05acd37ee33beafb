//! Top-level router combining the API, the redirect and the front-end page.
//!
//! # Route Structure
//!
//! - `GET  /`        - Front-end page (`<static_dir>/index.html`)
//! - `GET  /{id}`    - Short URL redirect
//! - `/api/*`        - JSON API
//!
//! Every route is wrapped in the request tracing layer.

use std::path::Path;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the front-end `index.html`
pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/{id}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
