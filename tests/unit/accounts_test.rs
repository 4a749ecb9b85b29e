//! Tests for signup, sign-out and profile edits

use gossup::adapters::MemoryStore;
use gossup::core::models::{DEFAULT_AVATAR, UserProfile};
use gossup::core::ports::Keyspace;
use gossup::core::services::{Accounts, ProfileEdit};
use gossup::core::{GossupError, ValidationError};

use crate::common::{at, signed_in, signup_form};

fn rename(name: &str) -> ProfileEdit {
    ProfileEdit {
        anonymous_name: Some(name.to_string()),
        ..ProfileEdit::default()
    }
}

// =============================================================================
// SIGNUP
// =============================================================================

#[test]
fn test_signup_signs_the_user_in() {
    let store = MemoryStore::new();
    let accounts = Accounts::new(&store, Keyspace::default());
    let now = at(2024, 1, 10);

    let user = accounts.signup(signup_form("  NightOwl "), now).unwrap();

    assert_eq!(user.id, format!("user{}", now.timestamp_millis()));
    assert_eq!(user.anonymous_name, "NightOwl");
    assert_eq!(user.avatar(), "🦉");
    assert_eq!(user.college.as_deref(), Some("State U"));
    assert_eq!(user.points, Some(0));
    assert_eq!(user.join_date, Some(now));
    assert_eq!(accounts.current_user().unwrap(), Some(user));
}

#[test]
fn test_signup_defaults_avatar() {
    let store = MemoryStore::new();
    let accounts = Accounts::new(&store, Keyspace::default());
    let mut form = signup_form("Owl");
    form.avatar = None;
    assert_eq!(accounts.signup(form, at(2024, 1, 10)).unwrap().avatar(), DEFAULT_AVATAR);
}

#[test]
fn test_signup_blank_username_rejected() {
    let store = MemoryStore::new();
    let accounts = Accounts::new(&store, Keyspace::default());
    let err = accounts.signup(signup_form("   "), at(2024, 1, 10)).unwrap_err();
    assert_eq!(err.to_string(), "username cannot be empty");
    assert_eq!(accounts.current_user().unwrap(), None);
}

#[test]
fn test_signup_checks_passwords_before_terms() {
    let store = MemoryStore::new();
    let accounts = Accounts::new(&store, Keyspace::default());
    let mut form = signup_form("Owl");
    form.confirm_password = "other".to_string();
    form.agree_terms = false;
    assert!(matches!(
        accounts.signup(form, at(2024, 1, 10)),
        Err(GossupError::Validation(ValidationError::PasswordMismatch))
    ));
}

#[test]
fn test_logout_forgets_the_user() {
    let (store, _user) = signed_in("Owl");
    let accounts = Accounts::new(&store, Keyspace::default());
    accounts.logout().unwrap();
    assert_eq!(accounts.current_user().unwrap(), None);
    accounts.logout().unwrap();
}

#[test]
fn test_namespace_separates_sessions() {
    let (store, _user) = signed_in("Owl");
    let other = Accounts::new(&store, Keyspace::new("other"));
    assert_eq!(other.current_user().unwrap(), None);
}

// =============================================================================
// PROFILE EDITS
// =============================================================================

#[test]
fn test_rename_blocked_in_same_month() {
    let (store, mut user) = signed_in("Owl");
    user.last_username_change = Some(at(2023, 12, 1));
    let accounts = Accounts::new(&store, Keyspace::default());

    let err = accounts
        .update_profile(Some(&mut user), rename("Hawk"), at(2023, 12, 15))
        .unwrap_err();

    assert_eq!(err.to_string(), "You can only change your username once per month");
    assert_eq!(user.anonymous_name, "Owl");
}

#[test]
fn test_rename_allowed_next_month_and_stamped() {
    let (store, mut user) = signed_in("Owl");
    user.last_username_change = Some(at(2023, 12, 1));
    let accounts = Accounts::new(&store, Keyspace::default());
    let now = at(2024, 1, 2);

    accounts.update_profile(Some(&mut user), rename("Hawk"), now).unwrap();

    assert_eq!(user.anonymous_name, "Hawk");
    assert_eq!(user.last_username_change, Some(now));
    assert_eq!(accounts.current_user().unwrap(), Some(user));
}

#[test]
fn test_same_name_is_not_a_rename() {
    let (store, mut user) = signed_in("Owl");
    user.last_username_change = Some(at(2024, 1, 10));
    let accounts = Accounts::new(&store, Keyspace::default());

    accounts.update_profile(Some(&mut user), rename("Owl"), at(2024, 1, 11)).unwrap();

    assert_eq!(user.last_username_change, Some(at(2024, 1, 10)));
}

#[test]
fn test_blank_college_clears_it() {
    let (store, mut user) = signed_in("Owl");
    let accounts = Accounts::new(&store, Keyspace::default());
    let edit = ProfileEdit {
        college: Some(" ".to_string()),
        avatar: Some("🐼".to_string()),
        ..ProfileEdit::default()
    };

    accounts.update_profile(Some(&mut user), edit, at(2024, 2, 1)).unwrap();

    assert_eq!(user.college, None);
    assert_eq!(user.avatar(), "🐼");
}

#[test]
fn test_unknown_avatar_leaves_profile_untouched() {
    let (store, mut user) = signed_in("Owl");
    let before: UserProfile = user.clone();
    let accounts = Accounts::new(&store, Keyspace::default());
    let edit = ProfileEdit {
        anonymous_name: Some("Hawk".to_string()),
        avatar: Some("🚀".to_string()),
        ..ProfileEdit::default()
    };

    assert!(accounts.update_profile(Some(&mut user), edit, at(2024, 2, 1)).is_err());
    assert_eq!(user, before);
    assert_eq!(accounts.current_user().unwrap(), Some(before));
}
