//! Handlers for the URL collection and item endpoints.
//!
//! Every handler answers with the JSON envelope: [`ApiSuccess`] on success,
//! [`AppError`] on failure.

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
};
use tracing::info;

use crate::api::dto::{ApiSuccess, UrlForm};
use crate::domain::entities::UrlEntity;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored URL ordered by ID.
///
/// # Endpoint
///
/// `GET /api/`
pub async fn list_handler(State(state): State<AppState>) -> ApiSuccess<Vec<UrlEntity>> {
    ApiSuccess::ok(state.store.list())
}

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /api/` with form field `url`
///
/// # Response Codes
///
/// - **201 Created**: `result` holds the new entity
/// - **400 Bad Request**: `url` missing or empty
/// - **409 Conflict**: `url` already shortened
/// - **503 Service Unavailable**: no unused ID could be generated
pub async fn create_handler(
    State(state): State<AppState>,
    form: Result<Form<UrlForm>, FormRejection>,
) -> Result<ApiSuccess<UrlEntity>, AppError> {
    let url = UrlForm::require_url(form)?;

    let entity = state.store.create(&url)?;
    info!(id = %entity.id, url = %entity.url, "Created short URL");

    Ok(ApiSuccess::created(entity))
}

/// Returns a stored URL without counting a view.
///
/// # Endpoint
///
/// `GET /api/{id}`
pub async fn retrieve_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiSuccess<UrlEntity>, AppError> {
    Ok(ApiSuccess::ok(state.store.retrieve(&id)?))
}

/// Points an existing short ID at a new URL. The view counter restarts at 0.
///
/// # Endpoint
///
/// `PUT /api/{id}` with form field `url`
///
/// # Response Codes
///
/// - **200 OK**: `result` holds the replaced entity
/// - **400 Bad Request**: `url` missing or empty
/// - **409 Conflict**: another entity already stores `url`
/// - **404 Not Found**: unknown ID
pub async fn update_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    form: Result<Form<UrlForm>, FormRejection>,
) -> Result<ApiSuccess<UrlEntity>, AppError> {
    let url = UrlForm::require_url(form)?;

    let entity = state.store.update(&id, &url)?;
    info!(id = %entity.id, url = %entity.url, "Updated short URL");

    Ok(ApiSuccess::ok(entity))
}

/// Deletes a stored URL.
///
/// # Endpoint
///
/// `DELETE /api/{id}`
///
/// Answers **204 No Content** with a `null` result.
pub async fn delete_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiSuccess<()>, AppError> {
    state.store.delete(&id)?;
    info!(id = %id, "Deleted short URL");

    Ok(ApiSuccess::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlStore;
    use crate::error::StorageError;
    use crate::api::routes::api_routes;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn make_server(store: MockUrlStore) -> TestServer {
        let app = api_routes().with_state(AppState::new(Arc::new(store)));
        TestServer::new(app).unwrap()
    }

    fn entity(url: &str) -> UrlEntity {
        UrlEntity::new("dummy_id", url)
    }

    #[tokio::test]
    async fn test_create_without_url_skips_store() {
        let mut store = MockUrlStore::new();
        store.expect_create().times(0);
        let server = make_server(store);

        let response = server.post("/api/").await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "success": false, "error": "missing url" }));
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut store = MockUrlStore::new();
        store
            .expect_create()
            .withf(|url| url == "foo")
            .times(1)
            .returning(|url| Ok(entity(url)));
        let server = make_server(store);

        let response = server.post("/api/").form(&[("url", "foo")]).await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "success": true,
            "result": { "id": "dummy_id", "url": "foo", "views": 0 }
        }));
    }

    #[tokio::test]
    async fn test_create_already_exists() {
        let mut store = MockUrlStore::new();
        store
            .expect_create()
            .returning(|_| Err(StorageError::AlreadyExists));
        let server = make_server(store);

        let response = server.post("/api/").form(&[("url", "foo")]).await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_create_no_available_ids() {
        let mut store = MockUrlStore::new();
        store
            .expect_create()
            .returning(|_| Err(StorageError::NoAvailableIds));
        let server = make_server(store);

        let response = server.post("/api/").form(&[("url", "foo")]).await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_retrieve() {
        let mut store = MockUrlStore::new();
        store
            .expect_retrieve()
            .withf(|id| id == "dummy_id")
            .returning(|_| Ok(entity("foo")));
        let server = make_server(store);

        let response = server.get("/api/dummy_id").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["result"]["url"], "foo");
    }

    #[tokio::test]
    async fn test_retrieve_not_found() {
        let mut store = MockUrlStore::new();
        store
            .expect_retrieve()
            .returning(|_| Err(StorageError::NotFound));
        let server = make_server(store);

        let response = server.get("/api/dummy_id").await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "success": false, "error": "not found" }));
    }

    #[tokio::test]
    async fn test_update_without_url_skips_store() {
        let mut store = MockUrlStore::new();
        store.expect_update().times(0);
        let server = make_server(store);

        let response = server.put("/api/dummy_id").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut store = MockUrlStore::new();
        store
            .expect_update()
            .withf(|id, url| id == "dummy_id" && url == "foo")
            .times(1)
            .returning(|_, url| Ok(entity(url)));
        let server = make_server(store);

        let response = server.put("/api/dummy_id").form(&[("url", "foo")]).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["result"]["views"], 0);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let cases = [
            (StorageError::NotFound, StatusCode::NOT_FOUND),
            (StorageError::AlreadyExists, StatusCode::CONFLICT),
        ];

        for (error, status) in cases {
            let mut store = MockUrlStore::new();
            store.expect_update().returning(move |_, _| Err(error));
            let server = make_server(store);

            let response = server.put("/api/dummy_id").form(&[("url", "foo")]).await;

            response.assert_status(status);
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let mut store = MockUrlStore::new();
        store
            .expect_delete()
            .withf(|id| id == "dummy_id")
            .times(1)
            .returning(|_| Ok(()));
        let server = make_server(store);

        let response = server.delete("/api/dummy_id").await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut store = MockUrlStore::new();
        store.expect_delete().returning(|_| Err(StorageError::NotFound));
        let server = make_server(store);

        let response = server.delete("/api/dummy_id").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list() {
        let mut store = MockUrlStore::new();
        store
            .expect_list()
            .returning(|| vec![UrlEntity::new("a", "first"), UrlEntity::new("b", "second")]);
        let server = make_server(store);

        let response = server.get("/api/").await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"].as_array().unwrap().len(), 2);
    }
}
