//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use tally::model::{Product, TallyEntry};
use tally::session::TallySession;
use tally::store::{FileStore, MemoryStore, StoreKey, TallyStore};
use tempfile::TempDir;

pub const RICE: &str = "7891000100103";
pub const BEANS: &str = "12345670";
pub const COFFEE: &str = "4006381333931";

pub fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Beans 500g".to_string(),
            system_code: "FJ-500".to_string(),
            barcode: BEANS.to_string(),
        },
        Product {
            id: 2,
            name: "Coffee 250g".to_string(),
            system_code: "CF-250".to_string(),
            barcode: COFFEE.to_string(),
        },
    ]
}

/// Memory-backed store with the catalog already saved.
pub fn seeded_store() -> TallyStore<MemoryStore> {
    let store = TallyStore::new(MemoryStore::new());
    assert!(store.save_products(&catalog()));
    store
}

pub fn seeded_session() -> TallySession<MemoryStore> {
    TallySession::open(seeded_store(), 1)
}

/// Temp dir plus the path of a not-yet-created store file inside it.
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("store.json");
    (temp_dir, path)
}

pub fn stored_tallies(store: &TallyStore<MemoryStore>) -> Vec<TallyEntry> {
    let raw = store
        .backend()
        .raw(StoreKey::Tallies.as_str())
        .expect("tallies were never written");
    serde_json::from_str(&raw).expect("stored tallies are valid JSON")
}
