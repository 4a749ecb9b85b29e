//! Shared test fixtures and helpers

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use gossup::adapters::MemoryStore;
use gossup::core::models::{Author, Post, UserProfile};
use gossup::core::ports::{KeyValueStore, Keyspace, StoreError};
use gossup::core::services::{Accounts, SignupForm};

/// A fixed instant so dates in assertions are predictable
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// A post with the given counters, created `minutes_ago` before `at(2024, 3, 1)`
pub fn post(id: &str, minutes_ago: i64, likes: u64, comments: u64, verifications: u64) -> Post {
    Post::new(
        id,
        Author::new("author", "Someone", "🦊"),
        format!("post {id}"),
        at(2024, 3, 1) - chrono::Duration::minutes(minutes_ago),
    )
    .with_counts(likes, 0, comments, 0, verifications)
}

/// A filled-in signup form that passes validation
pub fn signup_form(username: &str) -> SignupForm {
    SignupForm {
        username: username.to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        college: Some("State U".to_string()),
        avatar: Some("🦉".to_string()),
        agree_terms: true,
    }
}

/// An empty in-memory store with a user already signed in
pub fn signed_in(username: &str) -> (MemoryStore, UserProfile) {
    let store = MemoryStore::new();
    let user = Accounts::new(&store, Keyspace::default())
        .signup(signup_form(username), at(2024, 1, 10))
        .unwrap();
    (store, user)
}

pub fn ids(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

/// A memory store that can be told to refuse writes, and counts write batches
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub failing: AtomicBool,
    pub batches: AtomicUsize,
}

impl FlakyStore {
    pub fn over(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("disk full".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.remove(key)
    }

    fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        self.check()?;
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.inner.set_many(entries)
    }
}
