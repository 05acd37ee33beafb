//! Success envelope shared by all API handlers.
//!
//! Failures use the same outer shape and are rendered by
//! [`crate::error::AppError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `{"success": true, "result": ...}` with an explicit status code.
///
/// A unit result serializes as `null`.
#[derive(Debug)]
pub struct ApiSuccess<T> {
    pub status: StatusCode,
    pub result: T,
}

#[derive(Serialize)]
struct SuccessBody<T> {
    success: bool,
    result: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn ok(result: T) -> Self {
        Self::with_status(StatusCode::OK, result)
    }

    pub fn created(result: T) -> Self {
        Self::with_status(StatusCode::CREATED, result)
    }

    pub fn with_status(status: StatusCode, result: T) -> Self {
        Self { status, result }
    }
}

impl ApiSuccess<()> {
    pub fn no_content() -> Self {
        Self::with_status(StatusCode::NO_CONTENT, ())
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            success: true,
            result: self.result,
        };

        (self.status, Json(body)).into_response()
    }
}
