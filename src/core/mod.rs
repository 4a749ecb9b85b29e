//! Core domain logic for gossup
//!
//! This module contains the business logic of the feed. All storage and
//! randomness is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Post, ReactionState, UserProfile, CommentThread)
//! - `services/` - Ranking, engagement, accounts, posting, comments
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - The error taxonomy shared by all services

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{Action, GossupError, ValidationError};
