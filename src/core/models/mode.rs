//! Feed ordering modes

use serde::{Deserialize, Serialize};

/// How the home feed is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedMode {
    /// Weighted engagement, with a little shuffling at the top
    #[default]
    Trending,
    /// Newest first
    Latest,
}

impl std::fmt::Display for FeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trending => write!(f, "trending"),
            Self::Latest => write!(f, "latest"),
        }
    }
}

impl std::str::FromStr for FeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trending" | "hot" => Ok(Self::Trending),
            "latest" | "new" | "newest" => Ok(Self::Latest),
            _ => Err(format!("Unknown feed mode: {s}. Use 'trending' or 'latest'")),
        }
    }
}

/// How posts are listed on a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSort {
    /// Most liked first
    #[default]
    Popular,
    /// Newest first
    Latest,
    /// Oldest first
    Oldest,
}

impl std::fmt::Display for ProfileSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::Latest => write!(f, "latest"),
            Self::Oldest => write!(f, "oldest"),
        }
    }
}

impl std::str::FromStr for ProfileSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(Self::Popular),
            "latest" | "newest" => Ok(Self::Latest),
            "oldest" => Ok(Self::Oldest),
            _ => Err(format!("Unknown sort: {s}. Use: popular, latest, oldest")),
        }
    }
}
