//! Account commands - signup, logout, profile

use chrono::Utc;

use gossup::core::models::{ProfileSort, ReactionKind};
use gossup::core::services::{ProfileEdit, SignupForm, sort_for_profile};
use gossup::output::{OperationResult, OutputMode, PostView, ProfileResult};

use super::Session;

/// Create an account and sign in
pub fn signup(form: SignupForm, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let user = session.accounts().signup(form, Utc::now())?;
    OperationResult::ok(format!(
        "Welcome, {} {}! You are signed in as {}.",
        user.avatar(),
        user.anonymous_name,
        user.id
    ))
    .render(mode);
    Ok(())
}

/// Sign out
pub fn logout(mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    session.accounts().logout()?;
    OperationResult::ok("Signed out.").render(mode);
    Ok(())
}

/// Show the signed-in profile and the user's posts
pub fn profile(sort: ProfileSort, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let Some(user) = session.accounts().current_user()? else {
        OperationResult::failed("Not signed in. Run 'gossup signup' to create an account.")
            .render(mode);
        return Ok(());
    };

    let now = Utc::now();
    let engagement = session.engagement();
    let own: Vec<_> = session
        .board()
        .all(now)?
        .into_iter()
        .filter(|p| p.author.user_id == user.id)
        .collect();
    let posts = sort_for_profile(&own, sort)
        .iter()
        .map(|p| Ok(PostView::new(p, engagement.load(Some(&user), &p.id)?)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let liked = engagement.reacted(&user, ReactionKind::Like)?.len();

    ProfileResult::new(&user, user.can_change_username(now), liked, posts).render(mode);
    Ok(())
}

/// Edit username, college or avatar
pub fn edit_profile(edit: ProfileEdit, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let accounts = session.accounts();
    let mut user = accounts.current_user()?;
    accounts.update_profile(user.as_mut(), edit, Utc::now())?;
    OperationResult::ok("Profile updated.").render(mode);
    Ok(())
}
