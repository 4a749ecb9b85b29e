//! Comment board - threads under posts
//!
//! Each post's thread is stored under `<postId>_comments`.

use chrono::{DateTime, Utc};
use log::debug;

use crate::core::error::{Action, GossupError, ValidationError, require_auth};
use crate::core::models::{Comment, CommentThread, Reply, UserProfile};
use crate::core::ports::{KeyValueStore, Keyspace, decode, encode};
use crate::core::services::posting::PostSlot;

/// Reads and writes comment threads
#[derive(Debug)]
pub struct CommentBoard<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    keys: Keyspace,
}

impl<'s, S: KeyValueStore + ?Sized> CommentBoard<'s, S> {
    /// Bind to a store
    #[must_use]
    pub const fn new(store: &'s S, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// The thread under a post, empty if nobody commented yet
    pub fn thread(&self, post_id: &str) -> Result<CommentThread, GossupError> {
        Ok(decode(self.store, &self.keys.comments(post_id))?.unwrap_or_default())
    }

    /// Add a comment at the top of the thread and bump the post's counter
    ///
    /// The thread, and the post list for a listed post, are written in one
    /// batch. The returned comment carries its final id, which gets a `-<n>`
    /// suffix when another comment in the thread already took the timestamp.
    pub fn add_comment<'p>(
        &self,
        user: Option<&UserProfile>,
        post: impl Into<PostSlot<'p>>,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Comment, GossupError> {
        require_auth(user, Action::Comment)?;
        let content = non_blank(content)?;
        let slot = post.into();
        let post_id = slot.post().id.clone();

        let mut thread = self.thread(&post_id)?;
        let comment = thread.push_comment(Comment::new(content, now)).clone();
        let mut updated = slot.post().clone();
        updated.comments = updated.comments.saturating_add(1);

        let mut entries = vec![encode(self.keys.comments(&post_id), &thread)?];
        entries.extend(slot.entry(&self.keys, &updated)?);
        self.store.set_many(&entries)?;

        slot.commit(updated);
        debug!("comment {} on post {post_id}", comment.id);
        Ok(comment)
    }

    /// Append a reply under an existing comment
    pub fn add_reply(
        &self,
        user: Option<&UserProfile>,
        post_id: &str,
        comment_id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Reply, GossupError> {
        require_auth(user, Action::Reply)?;
        let content = non_blank(content)?;

        let mut thread = self.thread(post_id)?;
        let reply = thread
            .push_reply(comment_id, Reply::new(comment_id, content, now))
            .cloned()
            .ok_or_else(|| GossupError::not_found("comment", comment_id))?;
        self.save(post_id, &thread)?;
        Ok(reply)
    }

    /// Like a comment; returns its new like count
    pub fn like_comment(
        &self,
        user: Option<&UserProfile>,
        post_id: &str,
        comment_id: &str,
    ) -> Result<u64, GossupError> {
        require_auth(user, Action::Like)?;
        let mut thread = self.thread(post_id)?;
        let likes = thread
            .like_comment(comment_id)
            .ok_or_else(|| GossupError::not_found("comment", comment_id))?;
        self.save(post_id, &thread)?;
        Ok(likes)
    }

    /// Like a reply; returns its new like count
    pub fn like_reply(
        &self,
        user: Option<&UserProfile>,
        post_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<u64, GossupError> {
        require_auth(user, Action::Like)?;
        let mut thread = self.thread(post_id)?;
        if thread.comment(comment_id).is_none() {
            return Err(GossupError::not_found("comment", comment_id));
        }
        let likes = thread
            .like_reply(comment_id, reply_id)
            .ok_or_else(|| GossupError::not_found("reply", reply_id))?;
        self.save(post_id, &thread)?;
        Ok(likes)
    }

    fn save(&self, post_id: &str, thread: &CommentThread) -> Result<(), GossupError> {
        self.store.set_many(&[encode(self.keys.comments(post_id), thread)?])?;
        Ok(())
    }
}

fn non_blank(content: &str) -> Result<&str, ValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Empty { field: "content" })
    } else {
        Ok(trimmed)
    }
}
