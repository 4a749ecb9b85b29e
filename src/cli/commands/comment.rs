//! Comment commands - list, add, reply, like

use chrono::Utc;

use gossup::core::services::PostSlot;
use gossup::output::{CommentsResult, OperationResult, OutputMode};

use super::Session;

/// Show a post's comment thread
pub fn comments(post_id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let thread = session.comment_board().thread(post_id)?;
    CommentsResult {
        post_id: post_id.to_string(),
        comments: thread.comments,
    }
    .render(mode);
    Ok(())
}

/// Comment on a post
pub fn comment(post_id: &str, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let board = session.board();
    let now = Utc::now();
    let user = session.accounts().current_user()?;

    let mut posts = board.all(now)?;
    let slot = PostSlot::listed(&mut posts, post_id)?;
    let comment = session.comment_board().add_comment(user.as_ref(), slot, text, now)?;

    OperationResult::ok(format!("Added comment {} to post {post_id}", comment.id)).render(mode);
    Ok(())
}

/// Reply to a comment
pub fn reply(post_id: &str, comment_id: &str, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let user = session.accounts().current_user()?;
    let reply = session
        .comment_board()
        .add_reply(user.as_ref(), post_id, comment_id, text, Utc::now())?;
    OperationResult::ok(format!("Added reply {} to comment {comment_id}", reply.id)).render(mode);
    Ok(())
}

/// Like a comment, or one of its replies
pub fn like_comment(
    post_id: &str,
    comment_id: &str,
    reply_id: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let session = Session::open();
    let user = session.accounts().current_user()?;
    let comments = session.comment_board();
    let likes = match reply_id {
        Some(reply_id) => comments.like_reply(user.as_ref(), post_id, comment_id, reply_id)?,
        None => comments.like_comment(user.as_ref(), post_id, comment_id)?,
    };
    OperationResult::ok(format!("Liked ({likes} total)")).render(mode);
    Ok(())
}
