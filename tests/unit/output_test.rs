//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use gossup::core::models::{ReactionState, UserProfile, Vote, seed};
use gossup::output::{FeedResult, OperationResult, OutputMode, PostView, ProfileResult, ReactionResult};

use crate::common::at;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// PostView Tests
// =============================================================================

#[test]
fn post_view_carries_score_and_viewer_state() {
    let posts = seed::campus_posts(at(2024, 3, 1));
    let state = ReactionState {
        vote: Vote::Liked,
        verified: true,
    };
    let view = PostView::new(&posts[6], state);

    assert_eq!(view.id, "7");
    assert_eq!(view.username, "CampusHero");
    assert_eq!(view.score, 345);
    assert!(view.liked);
    assert!(!view.disliked);
    assert!(view.verified);
}

#[test]
fn feed_result_serialization() {
    let posts = seed::campus_posts(at(2024, 3, 1));
    let result = FeedResult {
        mode: "trending".to_string(),
        posts: vec![PostView::new(&posts[0], ReactionState::default())],
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["mode"], "trending");
    assert_eq!(json["posts"][0]["id"], "1");
    assert_eq!(json["posts"][0]["likes"], 42);
    assert_eq!(json["posts"][0]["score"], 94);
    assert_eq!(json["posts"][0]["liked"], false);
}

#[test]
fn reaction_result_omits_missing_points() {
    let posts = seed::campus_posts(at(2024, 3, 1));
    let result = ReactionResult {
        action: "like".to_string(),
        post: PostView::new(&posts[0], ReactionState::default()),
        points_awarded: None,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("points_awarded"));

    let result = ReactionResult {
        points_awarded: Some(5),
        ..result
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["points_awarded"], 5);
}

// =============================================================================
// ProfileResult Tests
// =============================================================================

#[test]
fn profile_result_from_user() {
    let mut user = UserProfile::new("user1", "Owl");
    user.points = Some(15);
    let result = ProfileResult::new(&user, false, 3, Vec::new());

    assert_eq!(result.avatar, "😎");
    assert_eq!(result.points, 15);
    assert!(!result.verified_gossiper);
    assert!(!result.can_change_username);
    assert_eq!(result.liked_count, 3);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("college").is_none());
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_success_and_failure() {
    let ok = OperationResult::ok("Signed out.");
    assert!(ok.success);
    let failed = OperationResult::failed("Sign in to like.");
    assert!(!failed.success);
    assert_eq!(serde_json::to_value(&failed).unwrap()["message"], "Sign in to like.");
}
