//! Key-value store port
//!
//! Every piece of durable state (the signed-in profile, per-user reaction
//! lists, posts, comment threads) is a JSON string under a string key.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures of the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of strings
    #[error("corrupt store file {}: {source}", path.display())]
    Corrupt {
        /// File involved
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded or decoded
    #[error("malformed value under {key}: {source}")]
    Malformed {
        /// Key involved
        key: String,
        /// Serde error
        #[source]
        source: serde_json::Error,
    },

    /// The store cannot be used right now
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage
///
/// Implementations decide where values live (memory, a JSON file, a remote
/// service). A `set_many` batch should land as a unit where the backend
/// allows it.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value; missing keys are not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Write several values together
    fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Read and decode a JSON value
pub fn decode<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
}

/// Encode a value as a `(key, json)` entry ready for `set_many`
pub fn encode<T: Serialize + ?Sized>(key: String, value: &T) -> Result<(String, String), StoreError> {
    match serde_json::to_string(value) {
        Ok(json) => Ok((key, json)),
        Err(source) => Err(StoreError::Malformed { key, source }),
    }
}

/// Names of the keys gossup reads and writes
///
/// Profile and post keys are prefixed with the namespace; reaction lists
/// are keyed by user id alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    namespace: String,
}

impl Keyspace {
    /// Default namespace
    pub const DEFAULT_NAMESPACE: &'static str = "gossup";

    /// Create a keyspace with the given prefix
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The prefix in use
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<namespace>User`: the signed-in profile
    #[must_use]
    pub fn user(&self) -> String {
        format!("{}User", self.namespace)
    }

    /// `<namespace>Posts`: the stored post list
    #[must_use]
    pub fn posts(&self) -> String {
        format!("{}Posts", self.namespace)
    }

    /// `<postId>_comments`: a post's comment thread
    #[must_use]
    pub fn comments(&self, post_id: &str) -> String {
        format!("{post_id}_comments")
    }
}

impl Default for Keyspace {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}
