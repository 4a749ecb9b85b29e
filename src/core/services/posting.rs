//! Post board - the stored post list and post creation
//!
//! Until the first write, the board serves the built-in campus seed.
//! [`PostSlot`] lets other services fold the rewritten post list into their
//! own write batch, so counters and reaction state land together.

use chrono::{DateTime, Utc};
use log::info;

use crate::core::error::{Action, GossupError, ValidationError, require_auth};
use crate::core::models::{Post, UserProfile, seed};
use crate::core::ports::{KeyValueStore, Keyspace, StoreError, decode, encode};

/// Points a user earns for creating a post
pub const POST_POINTS: u64 = 10;

/// The post listing consumed by the feed
#[derive(Debug)]
pub struct PostBoard<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    keys: Keyspace,
}

impl<'s, S: KeyValueStore + ?Sized> PostBoard<'s, S> {
    /// Bind to a store
    #[must_use]
    pub const fn new(store: &'s S, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// Every post, in stored order; the seed when nothing is stored
    pub fn all(&self, now: DateTime<Utc>) -> Result<Vec<Post>, GossupError> {
        Ok(decode(self.store, &self.keys.posts())?.unwrap_or_else(|| seed::campus_posts(now)))
    }

    /// Replace the stored post list
    pub fn save_all(&self, posts: &[Post]) -> Result<(), GossupError> {
        self.store.set_many(&[encode(self.keys.posts(), posts)?])?;
        Ok(())
    }

    /// Publish a post under the user's anonymous identity
    ///
    /// Blank content is refused. The author earns [`POST_POINTS`]; posts and
    /// profile are written in one batch.
    pub fn create(
        &self,
        user: Option<&mut UserProfile>,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Post, GossupError> {
        let user = require_auth(user, Action::Post)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::Empty { field: "content" }.into());
        }

        let post = Post::new(now.timestamp_millis().to_string(), user.as_author(), content, now);
        let mut posts = self.all(now)?;
        posts.push(post.clone());

        let mut updated = user.clone();
        updated.award_points(POST_POINTS);
        self.store.set_many(&[encode(self.keys.posts(), &posts)?, encode(self.keys.user(), &updated)?])?;

        *user = updated;
        info!("{} posted {}", user.id, post.id);
        Ok(post)
    }
}

/// The post a service is about to change
///
/// A detached slot is a lone post owned by the caller. A listed slot points
/// into the stored post list; services then rewrite that list in the same
/// batch as the rest of their keys.
#[derive(Debug)]
pub struct PostSlot<'p> {
    posts: &'p mut [Post],
    index: usize,
    listed: bool,
}

impl<'p> PostSlot<'p> {
    /// The post `post_id` inside the stored post list
    pub fn listed(posts: &'p mut [Post], post_id: &str) -> Result<Self, GossupError> {
        let index = posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| GossupError::not_found("post", post_id))?;
        Ok(Self {
            posts,
            index,
            listed: true,
        })
    }

    /// The post as it is now
    #[must_use]
    pub const fn post(&self) -> &Post {
        &self.posts[self.index]
    }

    /// The post-list entry to write with `updated` in place, if listed
    pub(crate) fn entry(
        &self,
        keys: &Keyspace,
        updated: &Post,
    ) -> Result<Option<(String, String)>, StoreError> {
        if !self.listed {
            return Ok(None);
        }
        let mut posts = self.posts.to_vec();
        posts[self.index] = updated.clone();
        encode(keys.posts(), &posts).map(Some)
    }

    /// Replace the post in memory once its batch is written
    pub(crate) fn commit(self, updated: Post) {
        self.posts[self.index] = updated;
    }
}

impl<'p> From<&'p mut Post> for PostSlot<'p> {
    fn from(post: &'p mut Post) -> Self {
        Self {
            posts: std::slice::from_mut(post),
            index: 0,
            listed: false,
        }
    }
}

/// Find a post by id
pub fn find_mut<'p>(posts: &'p mut [Post], post_id: &str) -> Result<&'p mut Post, GossupError> {
    posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or_else(|| GossupError::not_found("post", post_id))
}
