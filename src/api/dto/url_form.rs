//! Form body for the create and update endpoints.

use axum::{Form, extract::rejection::FormRejection};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;

/// `application/x-www-form-urlencoded` body carrying the target url.
#[derive(Debug, Default, Deserialize)]
pub struct UrlForm {
    pub url: Option<String>,
}

impl UrlForm {
    /// Extracts a non-empty `url` from an optionally rejected form.
    ///
    /// A missing body, a body that is not form-encoded, an absent field and an
    /// empty value are all reported as `missing url`.
    pub fn require_url(form: Result<Form<UrlForm>, FormRejection>) -> Result<String, AppError> {
        let form = match form {
            Ok(Form(form)) => form,
            Err(rejection) => {
                debug!(%rejection, "Unusable form body");
                UrlForm::default()
            }
        };

        form.url
            .filter(|url| !url.is_empty())
            .ok_or_else(AppError::missing_url)
    }
}
