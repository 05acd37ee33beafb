//! Short ID generation.

/// Number of random bytes behind each short ID. Hex encoding doubles it.
const ID_BYTES: usize = 4;

/// Source of candidate short IDs.
///
/// The store asks for a new candidate on every attempt and checks it for
/// collisions itself, so implementations need not guarantee uniqueness.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Produces 8-character lowercase hex IDs from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}

pub fn generate_id() -> String {
    let bytes: [u8; ID_BYTES] = rand::random();
    hex::encode(bytes)
}
