#![allow(dead_code)]

use axum_test::TestServer;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use urlshortener::infrastructure::persistence::InMemoryUrlStore;
use urlshortener::routes::app_router;
use urlshortener::state::AppState;
use urlshortener::utils::IdGenerator;

/// Hands out a fixed list of IDs in order.
pub struct SequenceGenerator {
    ids: Mutex<VecDeque<String>>,
}

impl SequenceGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        self.ids
            .lock()
            .pop_front()
            .expect("SequenceGenerator ran out of ids")
    }
}

/// Always returns the same ID, so every create after the first collides.
pub struct CollidingGenerator;

impl IdGenerator for CollidingGenerator {
    fn generate(&self) -> String {
        "deadbeef".to_string()
    }
}

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

pub fn state_with_generator(generator: impl IdGenerator + 'static) -> AppState {
    AppState::new(Arc::new(InMemoryUrlStore::with_generator(Arc::new(
        generator,
    ))))
}

/// Full application router, as served by the binary.
pub fn make_server(state: AppState) -> TestServer {
    let app = app_router(state, Path::new("static"));
    TestServer::new(app).unwrap()
}
