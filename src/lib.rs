//! # URL Shortener
//!
//! A basic in-memory URL shortening service built with Axum.
//!
//! Clients submit a long URL to the JSON API and receive a short ID. Visiting
//! `/<id>` redirects to the stored URL and counts a view. Nothing is
//! persisted: the store starts empty on every launch.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL entity and the storage trait
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - Handlers, the response envelope and middleware
//!
//! ## API
//!
//! | Method | Path | Action |
//! |---|---|---|
//! | `GET` | `/api/` | list |
//! | `POST` | `/api/` | create (form field `url`) |
//! | `GET` | `/api/{id}` | retrieve |
//! | `PUT` | `/api/{id}` | update (form field `url`) |
//! | `DELETE` | `/api/{id}` | delete |
//! | `GET` | `/{id}` | redirect |
//!
//! Responses are `{"success": true, "result": ...}` or
//! `{"success": false, "error": "..."}`.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::entities::UrlEntity;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::InMemoryUrlStore;
    pub use crate::state::AppState;
    pub use crate::utils::IdGenerator;
}
