//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use gossup::core::Action;
use gossup::core::models::{FeedMode, ProfileSort, ReactionKind, Vote, is_known_avatar, month_delta};
use test_case::test_case;

use crate::common::{at, post};

// =============================================================================
// Mode Parsing Tests
// =============================================================================

#[test_case("trending", FeedMode::Trending ; "trending")]
#[test_case("HOT", FeedMode::Trending ; "hot alias")]
#[test_case("latest", FeedMode::Latest ; "latest")]
#[test_case("new", FeedMode::Latest ; "new alias")]
fn test_feed_mode_parsing(input: &str, expected: FeedMode) {
    assert_eq!(input.parse::<FeedMode>().unwrap(), expected);
}

#[test_case("popular", ProfileSort::Popular ; "popular")]
#[test_case("Latest", ProfileSort::Latest ; "latest")]
#[test_case("oldest", ProfileSort::Oldest ; "oldest")]
fn test_profile_sort_parsing(input: &str, expected: ProfileSort) {
    assert_eq!(input.parse::<ProfileSort>().unwrap(), expected);
}

#[test]
fn test_unknown_mode_rejected() {
    let err = "random".parse::<FeedMode>().unwrap_err();
    assert!(err.contains("Unknown feed mode"));
    assert!("best".parse::<ProfileSort>().is_err());
}

// =============================================================================
// Vote Transition Tests
// =============================================================================

#[test_case(Vote::Neutral, Vote::Liked ; "neutral to liked")]
#[test_case(Vote::Liked, Vote::Neutral ; "liked to neutral")]
#[test_case(Vote::Disliked, Vote::Liked ; "disliked to liked")]
fn test_like_transition(before: Vote, after: Vote) {
    assert_eq!(before.after_like(), after);
}

#[test_case(Vote::Neutral, Vote::Disliked ; "neutral to disliked")]
#[test_case(Vote::Disliked, Vote::Neutral ; "disliked to neutral")]
#[test_case(Vote::Liked, Vote::Disliked ; "liked to disliked")]
fn test_dislike_transition(before: Vote, after: Vote) {
    assert_eq!(before.after_dislike(), after);
}

#[test_case(Vote::Neutral, Vote::Liked, (11, 5) ; "like from neutral")]
#[test_case(Vote::Liked, Vote::Neutral, (9, 5) ; "unlike")]
#[test_case(Vote::Liked, Vote::Disliked, (9, 6) ; "like to dislike")]
#[test_case(Vote::Disliked, Vote::Liked, (11, 4) ; "dislike to like")]
#[test_case(Vote::Disliked, Vote::Neutral, (10, 4) ; "undislike")]
fn test_counter_deltas(before: Vote, after: Vote, expected: (u64, u64)) {
    let mut p = post("p", 1, 10, 0, 0);
    p.dislikes = 5;
    p.apply_vote(before, after);
    assert_eq!((p.likes, p.dislikes), expected);
}

// =============================================================================
// Score, Keys and Dates
// =============================================================================

#[test_case(0, 0, 0, 0 ; "no engagement")]
#[test_case(1, 0, 0, 1 ; "one like")]
#[test_case(0, 1, 0, 2 ; "one comment")]
#[test_case(0, 0, 1, 3 ; "one verification")]
#[test_case(42, 8, 12, 94 ; "seed post one")]
fn test_trending_score(likes: u64, comments: u64, verifications: u64, expected: u64) {
    assert_eq!(post("p", 1, likes, comments, verifications).trending_score(), expected);
}

#[test_case(ReactionKind::Like, "u1_likes" ; "likes")]
#[test_case(ReactionKind::Dislike, "u1_dislikes" ; "dislikes")]
#[test_case(ReactionKind::Verification, "u1_verifications" ; "verifications")]
fn test_reaction_keys(kind: ReactionKind, expected: &str) {
    assert_eq!(kind.storage_key("u1"), expected);
}

#[test_case(Action::Like, "like" ; "like")]
#[test_case(Action::Verify, "verify" ; "verify")]
#[test_case(Action::EditProfile, "edit profile" ; "edit profile")]
fn test_action_display(action: Action, expected: &str) {
    assert_eq!(action.to_string(), expected);
}

#[test_case((2023, 12, 1), (2023, 12, 31), 0 ; "same month")]
#[test_case((2023, 12, 31), (2024, 1, 1), 1 ; "across new year")]
#[test_case((2024, 1, 15), (2024, 3, 1), 2 ; "two months")]
fn test_month_delta(from: (i32, u32, u32), to: (i32, u32, u32), expected: i32) {
    assert_eq!(month_delta(at(from.0, from.1, from.2), at(to.0, to.1, to.2)), expected);
}

#[test_case("🦉", true ; "owl")]
#[test_case("😎", true ; "default")]
#[test_case("🚀", false ; "rocket")]
#[test_case("", false ; "empty")]
fn test_known_avatars(avatar: &str, expected: bool) {
    assert_eq!(is_known_avatar(avatar), expected);
}
