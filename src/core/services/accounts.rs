//! Account service - signup, session and profile edits
//!
//! The signed-in profile is a single JSON object under `<namespace>User`.
//! Signing out removes it.

use chrono::{DateTime, Utc};
use log::info;

use crate::core::error::{Action, GossupError, ValidationError, require_auth};
use crate::core::models::{DEFAULT_AVATAR, UserProfile, is_known_avatar};
use crate::core::ports::{KeyValueStore, Keyspace, decode, encode};

/// What a new user fills in at signup
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Anonymous username
    pub username: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// College, optional
    pub college: Option<String>,
    /// Chosen avatar; the default glyph when unset
    pub avatar: Option<String>,
    /// Terms accepted
    pub agree_terms: bool,
}

/// Changes requested on the profile page
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    /// New username; unchanged when `None`
    pub anonymous_name: Option<String>,
    /// New college; unchanged when `None`, cleared when blank
    pub college: Option<String>,
    /// New avatar; unchanged when `None`
    pub avatar: Option<String>,
}

/// Manages the signed-in profile
#[derive(Debug)]
pub struct Accounts<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    keys: Keyspace,
}

impl<'s, S: KeyValueStore + ?Sized> Accounts<'s, S> {
    /// Bind to a store
    #[must_use]
    pub const fn new(store: &'s S, keys: Keyspace) -> Self {
        Self { store, keys }
    }

    /// The signed-in profile, if any
    pub fn current_user(&self) -> Result<Option<UserProfile>, GossupError> {
        Ok(decode(self.store, &self.keys.user())?)
    }

    /// Create and sign in a new anonymous account
    ///
    /// Checks run in form order: username, password confirmation, terms,
    /// avatar. The password itself is not stored.
    pub fn signup(&self, form: SignupForm, now: DateTime<Utc>) -> Result<UserProfile, GossupError> {
        let username = form.username.trim();
        if username.is_empty() {
            return Err(ValidationError::Empty { field: "username" }.into());
        }
        if form.password != form.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if !form.agree_terms {
            return Err(ValidationError::TermsNotAccepted.into());
        }
        let avatar = form.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string());
        if !is_known_avatar(&avatar) {
            return Err(ValidationError::UnknownAvatar(avatar).into());
        }

        let mut user = UserProfile::new(format!("user{}", now.timestamp_millis()), username);
        user.college = form.college.filter(|c| !c.trim().is_empty());
        user.avatar = Some(avatar);
        user.points = Some(0);
        user.join_date = Some(now);
        user.time_spent = Some(0);
        user.verified_gossiper = Some(false);

        self.save(&user)?;
        info!("signed up {} as {}", user.id, user.anonymous_name);
        Ok(user)
    }

    /// Forget the signed-in profile
    pub fn logout(&self) -> Result<(), GossupError> {
        self.store.remove(&self.keys.user())?;
        Ok(())
    }

    /// Persist a profile as the signed-in user
    pub fn save(&self, user: &UserProfile) -> Result<(), GossupError> {
        self.store.set_many(&[encode(self.keys.user(), user)?])?;
        Ok(())
    }

    /// Apply profile edits
    ///
    /// A rename is refused while the last one is in the current calendar
    /// month; a successful rename stamps `lastUsernameChange` with `now`.
    pub fn update_profile(
        &self,
        user: Option<&mut UserProfile>,
        edit: ProfileEdit,
        now: DateTime<Utc>,
    ) -> Result<(), GossupError> {
        let user = require_auth(user, Action::EditProfile)?;
        let mut updated = user.clone();

        if let Some(name) = edit.anonymous_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::Empty { field: "username" }.into());
            }
            if name != user.anonymous_name {
                if !user.can_change_username(now) {
                    return Err(ValidationError::UsernameChangeTooSoon.into());
                }
                updated.anonymous_name = name.to_string();
                updated.last_username_change = Some(now);
            }
        }
        if let Some(college) = edit.college {
            updated.college = Some(college).filter(|c| !c.trim().is_empty());
        }
        if let Some(avatar) = edit.avatar {
            if !is_known_avatar(&avatar) {
                return Err(ValidationError::UnknownAvatar(avatar).into());
            }
            updated.avatar = Some(avatar);
        }

        self.save(&updated)?;
        *user = updated;
        Ok(())
    }
}
