//! Data Transfer Objects for API requests and responses.

pub mod envelope;
pub mod url_form;

pub use envelope::ApiSuccess;
pub use url_form::UrlForm;
