//! Reaction model
//!
//! A user's relationship to one post: a like/dislike vote plus an
//! independent verification flag. Like and dislike share a single
//! [`Vote`] so both can never be set at once.

use serde::{Deserialize, Serialize};

/// Like/dislike position of a user on a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    /// No vote
    #[default]
    Neutral,
    /// Liked
    Liked,
    /// Disliked
    Disliked,
}

impl Vote {
    /// Rebuild a vote from the stored like/dislike memberships
    ///
    /// A post present in both lists is treated as liked.
    #[must_use]
    pub const fn from_flags(liked: bool, disliked: bool) -> Self {
        match (liked, disliked) {
            (true, _) => Self::Liked,
            (false, true) => Self::Disliked,
            (false, false) => Self::Neutral,
        }
    }

    /// Vote after pressing "like": toggles off when already liked
    #[must_use]
    pub const fn after_like(self) -> Self {
        match self {
            Self::Liked => Self::Neutral,
            Self::Neutral | Self::Disliked => Self::Liked,
        }
    }

    /// Vote after pressing "dislike": toggles off when already disliked
    #[must_use]
    pub const fn after_dislike(self) -> Self {
        match self {
            Self::Disliked => Self::Neutral,
            Self::Neutral | Self::Liked => Self::Disliked,
        }
    }

    /// Whether this vote is a like
    #[must_use]
    pub const fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }

    /// Whether this vote is a dislike
    #[must_use]
    pub const fn is_disliked(self) -> bool {
        matches!(self, Self::Disliked)
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Liked => write!(f, "liked"),
            Self::Disliked => write!(f, "disliked"),
        }
    }
}

/// Everything one user has done to one post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionState {
    /// Like/dislike position
    pub vote: Vote,
    /// Whether the user vouched for the post
    pub verified: bool,
}

impl ReactionState {
    /// Whether the post is liked
    #[must_use]
    pub const fn liked(&self) -> bool {
        self.vote.is_liked()
    }

    /// Whether the post is disliked
    #[must_use]
    pub const fn disliked(&self) -> bool {
        self.vote.is_disliked()
    }
}

/// A per-user reaction list kept in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    /// Posts the user liked
    Like,
    /// Posts the user disliked
    Dislike,
    /// Posts the user verified
    Verification,
}

impl ReactionKind {
    /// Suffix of the storage key, as in `<userId>_likes`
    #[must_use]
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Self::Like => "likes",
            Self::Dislike => "dislikes",
            Self::Verification => "verifications",
        }
    }

    /// Storage key holding this list for a user
    #[must_use]
    pub fn storage_key(self, user_id: &str) -> String {
        format!("{user_id}_{}", self.key_suffix())
    }
}
