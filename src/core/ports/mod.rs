//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the outside world: where state is kept and where randomness
//! comes from.
//!
//! Implementations live in the `adapters` module, except for the small
//! noise sources which sit next to their trait.

mod kv_store;
mod noise;

pub use kv_store::{KeyValueStore, Keyspace, StoreError, decode, encode};
pub use noise::{NoNoise, RngNoise, TrendingNoise};

#[cfg(test)]
pub(crate) use kv_store::MockKeyValueStore;
