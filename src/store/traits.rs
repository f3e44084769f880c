use super::error::StoreError;

/// Flat key → text mapping.
///
/// No transactions and no partial writes: `set` replaces the whole value.
pub trait KvStore: Send + Sync {
    /// Get the value for a key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
