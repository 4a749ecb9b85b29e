//! Adapter implementations for port traits
//!
//! Concrete [`KeyValueStore`](crate::core::ports::KeyValueStore) backends:
//!
//! - `memory` - In-process map, for tests and embedding
//! - `file/` - One JSON object file on disk
//! - `delayed` - Wraps another store with a fixed per-call delay

pub mod delayed;
pub mod file;
pub mod memory;

pub use delayed::Delayed;
pub use file::FileStore;
pub use memory::MemoryStore;
