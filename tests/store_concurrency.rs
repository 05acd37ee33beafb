use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use urlshortener::prelude::*;

const THREADS: usize = 8;

#[test]
fn test_concurrent_create_same_url() {
    let store = Arc::new(InMemoryUrlStore::new());

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| store.create("https://example.com")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let created = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| **r == Err(StorageError::AlreadyExists))
        .count();

    assert_eq!(created, 1);
    assert_eq!(rejected, THREADS - 1);
    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_concurrent_create_distinct_urls() {
    let store = Arc::new(InMemoryUrlStore::new());

    thread::scope(|s| {
        for t in 0..THREADS {
            let store = &store;
            s.spawn(move || {
                for i in 0..50 {
                    store.create(&format!("https://example.com/{t}/{i}")).unwrap();
                }
            });
        }
    });

    let entities = store.list();
    let ids: HashSet<_> = entities.iter().map(|e| e.id.as_str()).collect();
    let urls: HashSet<_> = entities.iter().map(|e| e.url.as_str()).collect();

    assert_eq!(entities.len(), THREADS * 50);
    assert_eq!(ids.len(), entities.len());
    assert_eq!(urls.len(), entities.len());
}

#[test]
fn test_concurrent_views() {
    let store = Arc::new(InMemoryUrlStore::new());
    let id = store.create("https://example.com").unwrap().id;

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..100 {
                    store.view(&id).unwrap();
                }
            });
        }
    });

    assert_eq!(store.retrieve(&id).unwrap().views, (THREADS * 100) as u64);
}
