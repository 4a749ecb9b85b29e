//! Feed command - list posts in trending or latest order

use chrono::Utc;

use gossup::core::models::FeedMode;
use gossup::core::ports::{RngNoise, TrendingNoise};
use gossup::output::{FeedResult, OutputMode, PostView};

use super::Session;

/// Show the home feed
///
/// `seed` makes the trending shuffle reproducible.
pub fn feed(feed_mode: Option<FeedMode>, seed: Option<u64>, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open();
    let feed_mode = feed_mode.unwrap_or(session.config.feed.default_mode);
    let user = session.accounts().current_user()?;
    let posts = session.board().all(Utc::now())?;

    let mut noise: Box<dyn TrendingNoise> = match seed {
        Some(seed) => Box::new(RngNoise::seeded(seed)),
        None => Box::new(RngNoise::thread()),
    };
    let ranked = session.config.feed.ranker().rank(&posts, feed_mode, noise.as_mut());

    let engagement = session.engagement();
    let views = ranked
        .iter()
        .map(|p| Ok(PostView::new(p, engagement.load(user.as_ref(), &p.id)?)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    FeedResult {
        mode: feed_mode.to_string(),
        posts: views,
    }
    .render(mode);
    Ok(())
}
