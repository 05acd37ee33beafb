//! Storage implementations.
//!
//! - [`InMemoryUrlStore`] - process-local map, lost on restart

pub mod memory_url_store;

pub use memory_url_store::{InMemoryUrlStore, MAX_ID_ATTEMPTS};
