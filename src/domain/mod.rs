//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Concrete storage
//! lives in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
