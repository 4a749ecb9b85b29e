//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Comment, Post, ReactionState, UserProfile};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A post as shown to one viewer
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    /// Post id
    pub id: String,
    /// Author display name
    pub username: String,
    /// Author avatar
    pub avatar: String,
    /// Post text
    pub content: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Like counter
    pub likes: u64,
    /// Dislike counter
    pub dislikes: u64,
    /// Comment counter
    pub comments: u64,
    /// Share counter
    pub shares: u64,
    /// Verification counter
    pub verifications: u64,
    /// Trending score
    pub score: u64,
    /// Viewer liked it
    pub liked: bool,
    /// Viewer disliked it
    pub disliked: bool,
    /// Viewer verified it
    pub verified: bool,
}

impl PostView {
    /// Build the view of `post` for a viewer in `state`
    #[must_use]
    pub fn new(post: &Post, state: ReactionState) -> Self {
        Self {
            id: post.id.clone(),
            username: post.author.username.clone(),
            avatar: post.author.avatar.clone(),
            content: post.content.clone(),
            created_at: post.created_at.to_rfc3339(),
            likes: post.likes,
            dislikes: post.dislikes,
            comments: post.comments,
            shares: post.shares,
            verifications: post.verifications,
            score: post.trending_score(),
            liked: state.liked(),
            disliked: state.disliked(),
            verified: state.verified,
        }
    }

    fn render_human(&self) {
        println!(
            "[{}] {} {}  {}",
            self.id,
            self.avatar,
            self.username.bold(),
            self.created_at.dimmed()
        );
        println!("    {}", self.content);
        if self.verifications > 0 {
            let noun = if self.verifications == 1 { "person" } else { "people" };
            println!("    {}", format!("✔ Verified by {} {noun}", self.verifications).green());
        }
        let likes = format!("♥ {}", self.likes);
        let dislikes = format!("👎 {}", self.dislikes);
        let verify = format!("✔ {}", self.verifications);
        println!(
            "    {}  {}  💬 {}  ↗ {}  {}\n",
            if self.liked { likes.magenta().to_string() } else { likes },
            if self.disliked { dislikes.yellow().to_string() } else { dislikes },
            self.comments,
            self.shares,
            if self.verified { verify.green().to_string() } else { verify },
        );
    }
}

/// Result of a feed listing
#[derive(Debug, Serialize)]
pub struct FeedResult {
    /// Mode used ("trending" or "latest")
    pub mode: String,
    /// Posts in display order
    pub posts: Vec<PostView>,
}

impl FeedResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.posts.is_empty() {
            println!("No posts yet.");
            return;
        }
        println!("{} feed:\n", capitalize(&self.mode));
        for post in &self.posts {
            post.render_human();
        }
    }
}

/// Result of a like, dislike, verify, share or new post
#[derive(Debug, Serialize)]
pub struct ReactionResult {
    /// The action performed
    pub action: String,
    /// The post after the action
    pub post: PostView,
    /// Points earned by this action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u64>,
}

impl ReactionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let summary = match self.action.as_str() {
            "like" if self.post.liked => "Liked",
            "like" => "Removed like from",
            "dislike" if self.post.disliked => "Disliked",
            "dislike" => "Removed dislike from",
            "verify" if self.post.verified => "Verified",
            "verify" => "Removed verification from",
            "post" => "Published",
            _ => "Shared",
        };
        println!("{summary} post {}\n", self.post.id);
        self.post.render_human();
        if let Some(points) = self.points_awarded.filter(|p| *p > 0) {
            println!("{}", format!("+{points} points").green());
        }
    }
}

/// Result of showing a profile
#[derive(Debug, Serialize)]
pub struct ProfileResult {
    /// User id
    pub id: String,
    /// Anonymous display name
    pub anonymous_name: String,
    /// Avatar glyph
    pub avatar: String,
    /// College, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    /// Accumulated points
    pub points: u64,
    /// Verified-gossiper badge
    pub verified_gossiper: bool,
    /// Signup date (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    /// Whether a rename is allowed right now
    pub can_change_username: bool,
    /// Number of posts the user liked
    pub liked_count: usize,
    /// The user's own posts
    pub posts: Vec<PostView>,
}

impl ProfileResult {
    /// Build from a profile and their listings
    #[must_use]
    pub fn new(user: &UserProfile, can_change_username: bool, liked_count: usize, posts: Vec<PostView>) -> Self {
        Self {
            id: user.id.clone(),
            anonymous_name: user.anonymous_name.clone(),
            avatar: user.avatar().to_string(),
            college: user.college.clone(),
            points: user.points(),
            verified_gossiper: user.is_verified_gossiper(),
            join_date: user.join_date.map(|d| d.to_rfc3339()),
            can_change_username,
            liked_count,
            posts,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let badge = if self.verified_gossiper {
            format!(" {}", "✔ verified gossiper".green())
        } else {
            String::new()
        };
        println!("{} {}{badge}", self.avatar, self.anonymous_name.bold());
        println!("  ID: {}", self.id);
        if let Some(college) = &self.college {
            println!("  College: {college}");
        }
        if let Some(joined) = &self.join_date {
            println!("  Joined: {joined}");
        }
        println!("  Points: {}", self.points);
        println!("  Posts: {}  Liked: {}", self.posts.len(), self.liked_count);
        if !self.can_change_username {
            println!("  {}", "Username can be changed again next month".dimmed());
        }
        if !self.posts.is_empty() {
            println!();
            for post in &self.posts {
                post.render_human();
            }
        }
    }
}

/// Result of listing a comment thread
#[derive(Debug, Serialize)]
pub struct CommentsResult {
    /// Post the thread belongs to
    pub post_id: String,
    /// Comments, newest first
    pub comments: Vec<Comment>,
}

impl CommentsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.comments.is_empty() {
            println!("No comments on post {} yet.", self.post_id);
            return;
        }
        for comment in &self.comments {
            println!("[{}] {}  ♥ {}", comment.id, comment.content, comment.likes);
            for reply in &comment.replies {
                println!("    ↳ [{}] {}  ♥ {}", reply.id, reply.content, reply.likes);
            }
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful operation with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed operation with a message
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
