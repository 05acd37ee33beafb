//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Short ID generation

pub mod id_generator;

pub use id_generator::{IdGenerator, RandomIdGenerator};

#[cfg(test)]
pub use id_generator::MockIdGenerator;
