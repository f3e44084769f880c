//! Persistent key-value storage for the product catalog and tally list.
//!
//! Both collections live under fixed keys as JSON text. There is no caching
//! in front of the backend: every read goes to the store.

mod error;
mod file;
mod memory;
mod tally;
mod traits;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use tally::{StoreKey, TallyStore};
pub use traits::KvStore;
