//! Fixed-latency store wrapper
//!
//! Stands in for a remote round-trip: every call sleeps for a fixed
//! duration, then always completes. Callers see the same results as from
//! the wrapped store.

use std::thread;
use std::time::Duration;

use crate::core::ports::{KeyValueStore, StoreError};

/// Wraps a store and delays every call
#[derive(Debug, Clone)]
pub struct Delayed<S> {
    inner: S,
    delay: Duration,
}

impl<S: KeyValueStore> Delayed<S> {
    /// Wrap `inner`, sleeping `delay` before each call
    #[must_use]
    pub const fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// The wrapped store
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn wait(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<S: KeyValueStore> KeyValueStore for Delayed<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.wait();
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.wait();
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.wait();
        self.inner.remove(key)
    }

    fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        self.wait();
        self.inner.set_many(entries)
    }
}
