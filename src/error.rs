//! Error types for the storage and HTTP layers.
//!
//! [`StorageError`] is raised by the store. [`AppError`] is what handlers
//! return; it renders the failure envelope `{"success": false, "error": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failures raised by a [`crate::domain::repositories::UrlStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("url already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("unable to find unused ID")]
    NoAvailableIds,
}

/// Failure response returned by API handlers.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Unavailable { message: String },
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Rejection for create/update requests without a usable `url` field.
    pub fn missing_url() -> Self {
        Self::bad_request("missing url")
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AlreadyExists => AppError::conflict(e.to_string()),
            StorageError::NotFound => AppError::not_found(e.to_string()),
            StorageError::NoAvailableIds => AppError::unavailable(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_mapping() {
        let cases = [
            (StorageError::AlreadyExists, StatusCode::CONFLICT, "url already exists"),
            (StorageError::NotFound, StatusCode::NOT_FOUND, "not found"),
            (
                StorageError::NoAvailableIds,
                StatusCode::SERVICE_UNAVAILABLE,
                "unable to find unused ID",
            ),
        ];

        for (storage_error, status, message) in cases {
            let err = AppError::from(storage_error);
            assert_eq!(err.status_code(), status);
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_missing_url_is_bad_request() {
        let err = AppError::missing_url();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing url");
    }
}
