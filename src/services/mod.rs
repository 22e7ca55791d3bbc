//! Service layer for persistence.
//!
//! This module contains the storage media and the store that loads and saves
//! the two persisted documents on top of them.

pub mod storage;
pub mod store;

// Re-export commonly used types
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::ReleaseStore;
