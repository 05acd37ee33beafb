//! In-memory [`UrlStore`] implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::UrlEntity;
use crate::domain::repositories::UrlStore;
use crate::error::StorageError;
use crate::utils::{IdGenerator, RandomIdGenerator};

/// Upper bound on ID generation attempts per `create`.
pub const MAX_ID_ATTEMPTS: usize = 3;

#[derive(Debug, Default)]
struct Entries {
    by_id: BTreeMap<String, UrlEntity>,
    ids_by_url: HashMap<String, String>,
}

/// Process-local store keeping every entity in memory.
///
/// A single mutex guards the primary map and the url index together, so the
/// uniqueness checks and the write that follows them happen atomically.
/// Nothing survives a restart.
pub struct InMemoryUrlStore {
    entries: Mutex<Entries>,
    generator: Arc<dyn IdGenerator>,
}

impl InMemoryUrlStore {
    /// Creates an empty store that draws random hex IDs.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(RandomIdGenerator))
    }

    /// Creates an empty store using `generator` for new IDs.
    pub fn with_generator(generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
            generator,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlStore for InMemoryUrlStore {
    fn list(&self) -> Vec<UrlEntity> {
        self.entries.lock().by_id.values().cloned().collect()
    }

    fn create(&self, url: &str) -> Result<UrlEntity, StorageError> {
        let mut guard = self.entries.lock();
        let entries = &mut *guard;

        if entries.ids_by_url.contains_key(url) {
            return Err(StorageError::AlreadyExists);
        }

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.generator.generate();
            if entries.by_id.contains_key(&id) {
                debug!(attempt, id = %id, "Generated ID already in use");
                continue;
            }

            let entity = UrlEntity::new(id.clone(), url);
            entries.ids_by_url.insert(url.to_owned(), id.clone());
            entries.by_id.insert(id, entity.clone());
            return Ok(entity);
        }

        warn!(attempts = MAX_ID_ATTEMPTS, "Failed to generate an unused ID");
        Err(StorageError::NoAvailableIds)
    }

    fn retrieve(&self, id: &str) -> Result<UrlEntity, StorageError> {
        self.entries
            .lock()
            .by_id
            .get(id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn view(&self, id: &str) -> Result<UrlEntity, StorageError> {
        let mut entries = self.entries.lock();
        let entity = entries.by_id.get_mut(id).ok_or(StorageError::NotFound)?;
        entity.views += 1;
        Ok(entity.clone())
    }

    fn update(&self, id: &str, url: &str) -> Result<UrlEntity, StorageError> {
        let mut guard = self.entries.lock();
        let entries = &mut *guard;

        if let Some(owner) = entries.ids_by_url.get(url)
            && owner != id
        {
            return Err(StorageError::AlreadyExists);
        }

        let previous = entries.by_id.get(id).ok_or(StorageError::NotFound)?;
        let previous_url = previous.url.clone();

        let entity = UrlEntity::new(id, url);
        entries.ids_by_url.remove(&previous_url);
        entries.ids_by_url.insert(url.to_owned(), id.to_owned());
        entries.by_id.insert(id.to_owned(), entity.clone());
        Ok(entity)
    }

    fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut guard = self.entries.lock();
        let entries = &mut *guard;

        let removed = entries.by_id.remove(id).ok_or(StorageError::NotFound)?;
        entries.ids_by_url.remove(&removed.url);
        Ok(())
    }
}
