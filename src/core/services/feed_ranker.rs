//! Feed ranking
//!
//! Orders posts for the home feed and for profile listings. All sorts are
//! stable, so equal keys keep their input order.

use log::debug;

use crate::core::models::{FeedMode, Post, ProfileSort};
use crate::core::ports::TrendingNoise;

/// Default chance that a trending feed gets its top shuffled
pub const SWAP_PROBABILITY: f64 = 0.3;

/// Indices the first swapped post is drawn from
const SWAP_FROM: std::ops::Range<usize> = 0..3;

/// Indices the second swapped post is drawn from
const SWAP_TO: std::ops::Range<usize> = 2..5;

/// Produces the display order of the home feed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedRanker {
    swap_probability: f64,
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new(SWAP_PROBABILITY)
    }
}

impl FeedRanker {
    /// Ranker with a custom swap probability
    #[must_use]
    pub const fn new(swap_probability: f64) -> Self {
        Self { swap_probability }
    }

    /// Chance of the trending swap
    #[must_use]
    pub const fn swap_probability(&self) -> f64 {
        self.swap_probability
    }

    /// Rank the full post set for `mode`
    ///
    /// `latest` is deterministic. `trending` sorts by
    /// [`Post::trending_score`] and then, with probability
    /// `swap_probability`, swaps one post from positions `0..3` with one from
    /// `2..5`. The swap is skipped if either position is past the end.
    #[must_use]
    pub fn rank(&self, posts: &[Post], mode: FeedMode, noise: &mut dyn TrendingNoise) -> Vec<Post> {
        let mut ranked = posts.to_vec();
        match mode {
            FeedMode::Latest => sort_newest_first(&mut ranked),
            FeedMode::Trending => {
                sort_by_score(&mut ranked);
                if noise.chance(self.swap_probability) {
                    let i = noise.index(SWAP_FROM);
                    let j = noise.index(SWAP_TO);
                    if i < ranked.len() && j < ranked.len() {
                        debug!("trending swap: {i} <-> {j}");
                        ranked.swap(i, j);
                    }
                }
            },
        }
        ranked
    }
}

/// Stable descending sort by trending score
pub fn sort_by_score(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.trending_score().cmp(&a.trending_score()));
}

fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Order a user's own posts for their profile page
#[must_use]
pub fn sort_for_profile(posts: &[Post], sort: ProfileSort) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    match sort {
        ProfileSort::Popular => sorted.sort_by(|a, b| b.likes.cmp(&a.likes)),
        ProfileSort::Latest => sort_newest_first(&mut sorted),
        ProfileSort::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    sorted
}
