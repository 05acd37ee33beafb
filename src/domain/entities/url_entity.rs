//! Shortened URL entity.

use serde::{Deserialize, Serialize};

/// A shortened URL record.
///
/// `id` is assigned once at creation and never changes. `views` only grows,
/// except when an update replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntity {
    pub id: String,
    pub url: String,
    pub views: u64,
}

impl UrlEntity {
    /// Creates a fresh entity with a zero view counter.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            views: 0,
        }
    }
}
