//! Reaction commands - like, dislike, verify, share

use chrono::Utc;
use clap::ValueEnum;

use gossup::core::services::{PostSlot, find_mut};
use gossup::output::{OutputMode, PostView, ReactionResult};

use super::Session;

/// A reaction a user can apply to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Reaction {
    /// Toggle like
    Like,
    /// Toggle dislike
    Dislike,
    /// Toggle verification
    Verify,
    /// Count a share
    Share,
}

impl Reaction {
    const fn name(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Verify => "verify",
            Self::Share => "share",
        }
    }
}

/// Apply a reaction to a post; its counters are saved with the reaction
pub fn react(reaction: Reaction, post_id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let accounts = session.accounts();
    let board = session.board();
    let engagement = session.engagement();

    let mut user = accounts.current_user()?;
    let mut posts = board.all(Utc::now())?;
    let slot = PostSlot::listed(&mut posts, post_id)?;

    let mut points_awarded = None;
    let state = match reaction {
        Reaction::Like => engagement.like(user.as_ref(), slot)?,
        Reaction::Dislike => engagement.dislike(user.as_ref(), slot)?,
        Reaction::Verify => {
            let outcome = engagement.verify(user.as_mut(), slot)?;
            points_awarded = Some(outcome.points_awarded);
            outcome.state
        },
        Reaction::Share => {
            engagement.share(user.as_ref(), slot)?;
            engagement.load(user.as_ref(), post_id)?
        },
    };
    let view = PostView::new(find_mut(&mut posts, post_id)?, state);

    ReactionResult {
        action: reaction.name().to_string(),
        post: view,
        points_awarded,
    }
    .render(mode);
    Ok(())
}
