//! Storage trait for shortened URLs.

use crate::domain::entities::UrlEntity;
use crate::error::StorageError;

/// Storage interface for shortened URLs.
///
/// Implementations enforce two uniqueness constraints: at most one entity per
/// `id` and at most one entity per `url`. Every operation is atomic with
/// respect to the others.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlStore: Send + Sync {
    /// Returns every entity ordered by ascending `id`.
    fn list(&self) -> Vec<UrlEntity>;

    /// Stores `url` under a freshly generated short ID.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if `url` is already stored.
    /// Returns [`StorageError::NoAvailableIds`] if every generated ID collided.
    fn create(&self, url: &str) -> Result<UrlEntity, StorageError>;

    /// Looks up an entity without counting a view.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if `id` is unknown.
    fn retrieve(&self, id: &str) -> Result<UrlEntity, StorageError>;

    /// Records one view and returns the updated entity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if `id` is unknown.
    fn view(&self, id: &str) -> Result<UrlEntity, StorageError>;

    /// Replaces the entity at `id` with `{id, url, views: 0}`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if a different entity already
    /// stores `url`. This check runs before the existence check, so it wins
    /// when both apply.
    ///
    /// Returns [`StorageError::NotFound`] if `id` is unknown.
    fn update(&self, id: &str, url: &str) -> Result<UrlEntity, StorageError>;

    /// Removes the entity at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if `id` is unknown.
    fn delete(&self, id: &str) -> Result<(), StorageError>;
}
