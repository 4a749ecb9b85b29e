//! File-based key-value storage
//!
//! Implements `KeyValueStore` using a single JSON file.

mod store;

pub use store::FileStore;
