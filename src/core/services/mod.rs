//! Business logic services
//!
//! Orchestration over domain models. Services reach the outside world only
//! through the port traits they are handed.
//!
//! - [`feed_ranker`] - Order posts for the feed and profile pages
//! - [`engagement`] - Likes, dislikes, verifications and shares
//! - [`accounts`] - Signup, session and profile edits
//! - [`posting`] - The post list and post creation
//! - [`comments`] - Comment threads and replies

pub mod accounts;
pub mod comments;
pub mod engagement;
pub mod feed_ranker;
pub mod posting;

pub use accounts::{Accounts, ProfileEdit, SignupForm};
pub use comments::CommentBoard;
pub use engagement::{EngagementStore, VERIFY_POINTS, VerifyOutcome};
pub use feed_ranker::{FeedRanker, SWAP_PROBABILITY, sort_by_score, sort_for_profile};
pub use posting::{POST_POINTS, PostBoard, PostSlot, find_mut};
