//! Error taxonomy for gossup operations
//!
//! Every error is local to one user action. Nothing is retried.

use thiserror::Error;

use super::ports::StoreError;

/// A user-triggered action that needs a signed-in identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Like a post
    Like,
    /// Dislike a post
    Dislike,
    /// Verify a post
    Verify,
    /// Share a post
    Share,
    /// Comment on a post
    Comment,
    /// Reply to a comment
    Reply,
    /// Create a post
    Post,
    /// Edit the profile
    EditProfile,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
            Self::Verify => write!(f, "verify"),
            Self::Share => write!(f, "share"),
            Self::Comment => write!(f, "comment"),
            Self::Reply => write!(f, "reply"),
            Self::Post => write!(f, "post"),
            Self::EditProfile => write!(f, "edit profile"),
        }
    }
}

/// Input rejected before anything was written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Rename attempted within the same calendar month as the last one
    #[error("You can only change your username once per month")]
    UsernameChangeTooSoon,

    /// Signup password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Signup without accepting the terms
    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    /// A required text field was blank
    #[error("{field} cannot be empty")]
    Empty {
        /// Field name
        field: &'static str,
    },

    /// Avatar not in the selectable set
    #[error("unknown avatar: {0}")]
    UnknownAvatar(String),
}

/// Errors returned by gossup services
#[derive(Debug, Error)]
pub enum GossupError {
    /// A mutating action was attempted without a signed-in user
    #[error("sign in to {action}")]
    NotAuthenticated {
        /// What the user tried to do
        action: Action,
    },

    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced post, comment or reply does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// "post", "comment" or "reply"
        kind: &'static str,
        /// The id that was looked up
        id: String,
    },

    /// The backing store failed; the mutation was abandoned
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl GossupError {
    /// Shorthand for [`GossupError::NotFound`]
    #[must_use]
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Whether the caller should prompt for sign-in
    #[must_use]
    pub const fn needs_sign_in(&self) -> bool {
        matches!(self, Self::NotAuthenticated { .. })
    }
}

/// Gate a mutating action on a signed-in user
pub fn require_auth<T>(user: Option<T>, action: Action) -> Result<T, GossupError> {
    user.ok_or(GossupError::NotAuthenticated { action })
}
