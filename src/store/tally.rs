use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::StoreError;
use super::traits::KvStore;
use crate::model::{Product, TallyEntry};

/// Fixed keys under which the two collections are stored.
///
/// The `as_str()` value is the on-disk key. Once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Products,
    Tallies,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "LISTA_PRODUTO",
            Self::Tallies => "LISTA_CONTAGEM",
        }
    }
}

/// Typed access to the product and tally collections.
///
/// Read failures degrade to an empty list and write failures to `false`;
/// both are logged. `try_save` is available for callers that need the cause.
pub struct TallyStore<S> {
    backend: S,
}

impl<S: KvStore> TallyStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Write `value` under `key`, surfacing the failure cause.
    pub fn try_save(&self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.backend.set(key.as_str(), value)
    }

    /// Write `value` under `key`. Returns `false` on any failure.
    pub fn save(&self, key: StoreKey, value: &str) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "store write failed");
                false
            }
        }
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.list(StoreKey::Products)
    }

    pub fn list_tallies(&self) -> Vec<TallyEntry> {
        self.list(StoreKey::Tallies)
    }

    pub fn save_products(&self, products: &[Product]) -> bool {
        self.save_list(StoreKey::Products, products)
    }

    pub fn save_tallies(&self, tallies: &[TallyEntry]) -> bool {
        self.save_list(StoreKey::Tallies, tallies)
    }

    fn try_list<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.backend.get(key.as_str())? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Decode {
            key: key.as_str().to_string(),
            source: e,
        })
    }

    fn list<T: DeserializeOwned>(&self, key: StoreKey) -> Vec<T> {
        match self.try_list(key) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "store read failed, using empty list");
                Vec::new()
            }
        }
    }

    fn save_list<T: Serialize>(&self, key: StoreKey, items: &[T]) -> bool {
        match serde_json::to_string(items) {
            Ok(json) => self.save(key, &json),
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "failed to encode list");
                false
            }
        }
    }
}
