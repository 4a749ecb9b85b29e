//! Comment thread model
//!
//! Each post has one thread. Comments are kept newest first, replies under a
//! comment oldest first. Ids are creation milliseconds; when that id is
//! already taken in the thread a `-<n>` suffix makes it unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply to a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Reply id, `reply-<commentId>-<millis>`
    pub id: String,
    /// Reply text
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Like counter
    #[serde(default)]
    pub likes: u64,
}

/// A top-level comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id (creation time in milliseconds)
    pub id: String,
    /// Comment text
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Like counter
    #[serde(default)]
    pub likes: u64,
    /// Replies, oldest first
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Comment {
    /// Create a comment stamped at `now`
    #[must_use]
    pub fn new(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            content: content.into(),
            created_at: now,
            likes: 0,
            replies: Vec::new(),
        }
    }

    /// Find a reply by id
    #[must_use]
    pub fn reply(&self, reply_id: &str) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }
}

impl Reply {
    /// Create a reply to `comment_id` stamped at `now`
    #[must_use]
    pub fn new(comment_id: &str, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("reply-{comment_id}-{}", now.timestamp_millis()),
            content: content.into(),
            created_at: now,
            likes: 0,
        }
    }
}

/// All comments on one post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    /// Comments, newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Put a new comment at the top of the thread; returns it with its final id
    pub fn push_comment(&mut self, mut comment: Comment) -> &Comment {
        comment.id = unique_id(comment.id, |id| self.comment(id).is_some());
        self.comments.insert(0, comment);
        &self.comments[0]
    }

    /// Find a comment by id
    #[must_use]
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }

    /// Append a reply; returns `None` when the comment does not exist
    pub fn push_reply(&mut self, comment_id: &str, mut reply: Reply) -> Option<&Reply> {
        let comment = self.comment_mut(comment_id)?;
        reply.id = unique_id(reply.id, |id| comment.reply(id).is_some());
        comment.replies.push(reply);
        comment.replies.last()
    }

    /// Bump a comment's likes; returns the new count
    pub fn like_comment(&mut self, comment_id: &str) -> Option<u64> {
        let comment = self.comment_mut(comment_id)?;
        comment.likes = comment.likes.saturating_add(1);
        Some(comment.likes)
    }

    /// Bump a reply's likes; returns the new count
    pub fn like_reply(&mut self, comment_id: &str, reply_id: &str) -> Option<u64> {
        let reply = self
            .comment_mut(comment_id)?
            .replies
            .iter_mut()
            .find(|r| r.id == reply_id)?;
        reply.likes = reply.likes.saturating_add(1);
        Some(reply.likes)
    }

    /// Comments plus replies
    #[must_use]
    pub fn total(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}

fn unique_id(base: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base.as_str()) {
        return base;
    }
    let free = (1u64..).map(|n| format!("{base}-{n}")).find(|id| !taken(id.as_str()));
    free.unwrap_or(base)
}
