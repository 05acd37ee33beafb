//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! - [`persistence`] - Storage implementations

pub mod persistence;
