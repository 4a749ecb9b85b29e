//! Domain models for gossup
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Post`] - A feed item and its engagement counters
//! - [`ReactionState`] - One user's vote and verification on one post
//! - [`UserProfile`] - The signed-in user's anonymous identity
//! - [`CommentThread`] - Comments and replies under a post
//! - [`FeedMode`] / [`ProfileSort`] - Listing orders

mod comment;
mod mode;
mod post;
mod profile;
mod reaction;
pub mod seed;

pub use comment::{Comment, CommentThread, Reply};
pub use mode::{FeedMode, ProfileSort};
pub use post::{
    Author, COMMENT_WEIGHT, DEFAULT_AVATAR, DEFAULT_USERNAME, LIKE_WEIGHT, Post,
    VERIFICATION_WEIGHT,
};
pub use profile::{AVATARS, UserProfile, is_known_avatar, month_delta, parse_date};
pub use reaction::{ReactionKind, ReactionState, Vote};
