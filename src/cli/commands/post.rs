//! Post command - publish a new post

use chrono::Utc;

use gossup::core::models::ReactionState;
use gossup::core::services::POST_POINTS;
use gossup::output::{OutputMode, PostView, ReactionResult};

use super::Session;

/// Publish a post as the signed-in user
pub fn post(content: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let mut user = session.accounts().current_user()?;
    let post = session.board().create(user.as_mut(), content, Utc::now())?;

    ReactionResult {
        action: "post".to_string(),
        post: PostView::new(&post, ReactionState::default()),
        points_awarded: Some(POST_POINTS),
    }
    .render(mode);
    Ok(())
}
