//! Core domain entities.
//!
//! Entities are plain data structures without business logic. The store owns
//! every entity; handlers only ever see clones.

pub mod url_entity;

pub use url_entity::UrlEntity;
