//! Engagement service - reactions and their counter effects
//!
//! Reaction memberships live in three JSON arrays per user
//! (`<userId>_likes`, `<userId>_dislikes`, `<userId>_verifications`).
//! Every mutation writes the changed keys in one batch first and only then
//! touches the in-memory post and profile, so a store failure leaves
//! nothing half-applied. When the post comes from the stored post list
//! (a listed [`PostSlot`]), the rewritten list joins that same batch.

use log::debug;
use serde::Serialize;

use crate::core::error::{Action, GossupError, require_auth};
use crate::core::models::{ReactionKind, ReactionState, UserProfile, Vote};
use crate::core::ports::{KeyValueStore, Keyspace, decode, encode};
use crate::core::services::posting::PostSlot;

/// Points a user earns each time they turn a verification on
pub const VERIFY_POINTS: u64 = 5;

/// Result of a verification toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerifyOutcome {
    /// Reaction state after the toggle
    pub state: ReactionState,
    /// Points added to the acting user (never negative)
    pub points_awarded: u64,
}

/// Reads and writes one user's reactions against a key-value store
#[derive(Debug)]
pub struct EngagementStore<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    keys: Keyspace,
}

impl<'s, S: KeyValueStore + ?Sized> EngagementStore<'s, S> {
    /// Bind to a store
    #[must_use]
    pub const fn new(store: &'s S, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// Current reaction state; anonymous viewers always see the default
    pub fn load(&self, user: Option<&UserProfile>, post_id: &str) -> Result<ReactionState, GossupError> {
        let Some(user) = user else {
            return Ok(ReactionState::default());
        };
        let liked = self.list(&user.id, ReactionKind::Like)?;
        let disliked = self.list(&user.id, ReactionKind::Dislike)?;
        let verified = self.list(&user.id, ReactionKind::Verification)?;
        Ok(ReactionState {
            vote: Vote::from_flags(contains(&liked, post_id), contains(&disliked, post_id)),
            verified: contains(&verified, post_id),
        })
    }

    /// Press "like": neutral or disliked becomes liked, liked becomes neutral
    pub fn like<'p>(
        &self,
        user: Option<&UserProfile>,
        post: impl Into<PostSlot<'p>>,
    ) -> Result<ReactionState, GossupError> {
        let user = require_auth(user, Action::Like)?;
        self.vote(user, post.into(), Vote::after_like)
    }

    /// Press "dislike": neutral or liked becomes disliked, disliked becomes neutral
    pub fn dislike<'p>(
        &self,
        user: Option<&UserProfile>,
        post: impl Into<PostSlot<'p>>,
    ) -> Result<ReactionState, GossupError> {
        let user = require_auth(user, Action::Dislike)?;
        self.vote(user, post.into(), Vote::after_dislike)
    }

    /// Toggle verification
    ///
    /// Turning it on awards [`VERIFY_POINTS`] to the user. Turning it off
    /// keeps the points already awarded.
    pub fn verify<'p>(
        &self,
        user: Option<&mut UserProfile>,
        post: impl Into<PostSlot<'p>>,
    ) -> Result<VerifyOutcome, GossupError> {
        let user = require_auth(user, Action::Verify)?;
        let slot = post.into();
        let post_id = slot.post().id.clone();
        let kind = ReactionKind::Verification;
        let liked = self.list(&user.id, ReactionKind::Like)?;
        let disliked = self.list(&user.id, ReactionKind::Dislike)?;
        let mut verified = self.list(&user.id, kind)?;
        let now_verified = !contains(&verified, &post_id);
        set_membership(&mut verified, &post_id, now_verified);

        let mut updated_post = slot.post().clone();
        updated_post.apply_verification(now_verified);

        let mut entries = vec![encode(kind.storage_key(&user.id), &verified)?];
        let mut updated = user.clone();
        let points_awarded = if now_verified { VERIFY_POINTS } else { 0 };
        if points_awarded > 0 {
            updated.award_points(points_awarded);
            entries.push(encode(self.keys.user(), &updated)?);
        }
        entries.extend(slot.entry(&self.keys, &updated_post)?);
        self.store.set_many(&entries)?;

        *user = updated;
        slot.commit(updated_post);
        debug!("{} verified={} on post {}", user.id, now_verified, post_id);

        Ok(VerifyOutcome {
            state: ReactionState {
                vote: Vote::from_flags(contains(&liked, &post_id), contains(&disliked, &post_id)),
                verified: now_verified,
            },
            points_awarded,
        })
    }

    /// Count a share; nothing is remembered per user
    ///
    /// Only a listed post is written back.
    pub fn share<'p>(
        &self,
        user: Option<&UserProfile>,
        post: impl Into<PostSlot<'p>>,
    ) -> Result<u64, GossupError> {
        require_auth(user, Action::Share)?;
        let slot = post.into();
        let mut updated = slot.post().clone();
        updated.shares = updated.shares.saturating_add(1);
        if let Some(entry) = slot.entry(&self.keys, &updated)? {
            self.store.set_many(&[entry])?;
        }
        let shares = updated.shares;
        slot.commit(updated);
        Ok(shares)
    }

    fn vote(
        &self,
        user: &UserProfile,
        slot: PostSlot<'_>,
        transition: fn(Vote) -> Vote,
    ) -> Result<ReactionState, GossupError> {
        let post_id = slot.post().id.clone();
        let mut liked = self.list(&user.id, ReactionKind::Like)?;
        let mut disliked = self.list(&user.id, ReactionKind::Dislike)?;
        let verified = self.list(&user.id, ReactionKind::Verification)?;

        let before = Vote::from_flags(contains(&liked, &post_id), contains(&disliked, &post_id));
        let after = transition(before);

        let mut updated = slot.post().clone();
        updated.apply_vote(before, after);

        let mut entries = Vec::with_capacity(3);
        if set_membership(&mut liked, &post_id, after.is_liked()) {
            entries.push(encode(ReactionKind::Like.storage_key(&user.id), &liked)?);
        }
        if set_membership(&mut disliked, &post_id, after.is_disliked()) {
            entries.push(encode(ReactionKind::Dislike.storage_key(&user.id), &disliked)?);
        }
        entries.extend(slot.entry(&self.keys, &updated)?);
        self.store.set_many(&entries)?;

        slot.commit(updated);
        debug!("{} {before} -> {after} on post {post_id}", user.id);

        Ok(ReactionState {
            vote: after,
            verified: contains(&verified, &post_id),
        })
    }

    /// Ids of the posts a user has in one reaction list, oldest first
    pub fn reacted(&self, user: &UserProfile, kind: ReactionKind) -> Result<Vec<String>, GossupError> {
        self.list(&user.id, kind)
    }

    fn list(&self, user_id: &str, kind: ReactionKind) -> Result<Vec<String>, GossupError> {
        Ok(decode(self.store, &kind.storage_key(user_id))?.unwrap_or_default())
    }
}

fn contains(list: &[String], post_id: &str) -> bool {
    list.iter().any(|id| id == post_id)
}

/// Make `post_id` present or absent; returns whether the list changed
fn set_membership(list: &mut Vec<String>, post_id: &str, present: bool) -> bool {
    let was = contains(list, post_id);
    if present && !was {
        list.push(post_id.to_string());
    } else if !present && was {
        list.retain(|id| id != post_id);
    }
    was != present
}
