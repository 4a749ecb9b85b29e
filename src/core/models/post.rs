//! Post model
//!
//! A post is an anonymous feed item carrying its own engagement counters.
//! Counters never go negative and never wrap; arithmetic on them saturates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reaction::Vote;

/// Weight of a like in the trending score
pub const LIKE_WEIGHT: u64 = 1;
/// Weight of a comment in the trending score
pub const COMMENT_WEIGHT: u64 = 2;
/// Weight of a verification in the trending score
pub const VERIFICATION_WEIGHT: u64 = 3;

/// Avatar shown when an author never picked one
pub const DEFAULT_AVATAR: &str = "😎";

/// Display name shown when an author is unknown
pub const DEFAULT_USERNAME: &str = "Anonymous";

/// The anonymous identity a post is shown under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Id of the authoring user
    pub user_id: String,
    /// Anonymous display name
    #[serde(default = "default_username")]
    pub username: String,
    /// Avatar glyph
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

impl Author {
    /// Create an author identity
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            avatar: avatar.into(),
        }
    }
}

/// A feed post with its engagement counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque post id
    pub id: String,
    /// Who posted it
    pub author: Author,
    /// Post text
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Like counter
    #[serde(default)]
    pub likes: u64,
    /// Dislike counter
    #[serde(default)]
    pub dislikes: u64,
    /// Comment counter
    #[serde(default)]
    pub comments: u64,
    /// Share counter
    #[serde(default)]
    pub shares: u64,
    /// Verification counter
    #[serde(default)]
    pub verifications: u64,
}

impl Post {
    /// Create a post with all counters at zero
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        author: Author,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            content: content.into(),
            created_at,
            likes: 0,
            dislikes: 0,
            comments: 0,
            shares: 0,
            verifications: 0,
        }
    }

    /// Set every counter at once (seeds and tests)
    #[must_use]
    pub fn with_counts(
        mut self,
        likes: u64,
        dislikes: u64,
        comments: u64,
        shares: u64,
        verifications: u64,
    ) -> Self {
        self.likes = likes;
        self.dislikes = dislikes;
        self.comments = comments;
        self.shares = shares;
        self.verifications = verifications;
        self
    }

    /// Weighted engagement used by the trending feed
    #[must_use]
    pub const fn trending_score(&self) -> u64 {
        self.likes
            .saturating_mul(LIKE_WEIGHT)
            .saturating_add(self.comments.saturating_mul(COMMENT_WEIGHT))
            .saturating_add(self.verifications.saturating_mul(VERIFICATION_WEIGHT))
    }

    /// Apply the counter deltas of a vote transition
    pub fn apply_vote(&mut self, before: Vote, after: Vote) {
        match (before.is_liked(), after.is_liked()) {
            (true, false) => self.likes = self.likes.saturating_sub(1),
            (false, true) => self.likes = self.likes.saturating_add(1),
            _ => {},
        }
        match (before.is_disliked(), after.is_disliked()) {
            (true, false) => self.dislikes = self.dislikes.saturating_sub(1),
            (false, true) => self.dislikes = self.dislikes.saturating_add(1),
            _ => {},
        }
    }

    /// Apply the counter delta of a verification toggle
    pub fn apply_verification(&mut self, verified: bool) {
        if verified {
            self.verifications = self.verifications.saturating_add(1);
        } else {
            self.verifications = self.verifications.saturating_sub(1);
        }
    }

    /// Label shown under a post, e.g. "Verified by 1 person"
    #[must_use]
    pub fn verification_label(&self) -> String {
        let noun = if self.verifications == 1 { "person" } else { "people" };
        format!("Verified by {} {noun}", self.verifications)
    }
}
