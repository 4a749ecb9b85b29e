//! Built-in campus posts
//!
//! Used as the feed until anything has been stored.

use chrono::{DateTime, Duration, Utc};

use super::post::{Author, Post};

/// (user id, name, avatar, content, minutes ago, likes, dislikes, comments, shares, verifications)
type SeedRow = (&'static str, &'static str, &'static str, &'static str, i64, u64, u64, u64, u64, u64);

const ROWS: [SeedRow; 7] = [
    (
        "user1",
        "TruthTeller",
        "🦉",
        "Heard the CS professor is giving an open-book final exam this semester! 📚",
        10,
        42,
        5,
        8,
        3,
        12,
    ),
    (
        "user2",
        "CampusInsider",
        "🔍",
        "Someone left their AirPods in the library study room 3. If they're yours, the librarian has them.",
        60,
        17,
        2,
        5,
        1,
        3,
    ),
    (
        "user3",
        "FoodieStudent",
        "🍕",
        "The cafeteria is serving pizza today and it's actually good for once! 🍕",
        120,
        89,
        8,
        12,
        7,
        25,
    ),
    (
        "user4",
        "LibraryOwl",
        "📚",
        "Rumor has it that the dean is planning to extend library hours during finals week. Anyone else hear this?",
        180,
        65,
        3,
        23,
        5,
        7,
    ),
    (
        "user5",
        "GossipQueen",
        "👑",
        "Just saw two professors arguing in the parking lot about who deserves the last parking spot. Drama! 👀",
        300,
        124,
        10,
        31,
        15,
        18,
    ),
    (
        "user6",
        "DormLife",
        "🏠",
        "The wifi in the dorms is finally getting upgraded next week! No more lag during gaming sessions.",
        480,
        95,
        4,
        18,
        12,
        10,
    ),
    (
        "user7",
        "CampusHero",
        "😎",
        "Found a wallet with $200 cash near the student center. Turned it in to campus security. If it's yours, check there!",
        720,
        156,
        2,
        42,
        28,
        35,
    ),
];

/// The seven seed posts, ids "1" through "7", aged relative to `now`
#[must_use]
pub fn campus_posts(now: DateTime<Utc>) -> Vec<Post> {
    ROWS.iter()
        .enumerate()
        .map(
            |(i, &(user_id, name, avatar, content, minutes, likes, dislikes, comments, shares, verifications))| {
                Post::new(
                    (i + 1).to_string(),
                    Author::new(user_id, name, avatar),
                    content,
                    now - Duration::minutes(minutes),
                )
                .with_counts(likes, dislikes, comments, shares, verifications)
            },
        )
        .collect()
}
