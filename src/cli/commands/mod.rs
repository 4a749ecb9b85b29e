//! Command implementations

mod account;
mod comment;
mod feed;
mod post;
mod react;

pub use account::{edit_profile, logout, profile, signup};
pub use comment::{comment, comments, like_comment, reply};
pub use feed::feed;
pub use post::post;
pub use react::{Reaction, react};

use gossup::adapters::{Delayed, FileStore};
use gossup::config::Config;
use gossup::core::ports::Keyspace;
use gossup::core::services::{Accounts, CommentBoard, EngagementStore, PostBoard};

/// Store type used by the CLI
pub type CliStore = Delayed<FileStore>;

/// Everything a command needs: config, the store, and key names
#[derive(Debug)]
pub struct Session {
    /// Loaded configuration
    pub config: Config,
    store: CliStore,
    keys: Keyspace,
}

impl Session {
    /// Open the configured store
    pub fn open() -> Self {
        let config = Config::load();
        let store = Delayed::new(
            FileStore::new(config.storage.store_path()),
            config.storage.latency(),
        );
        let keys = config.storage.keyspace();
        log::debug!("using store {}", store.inner().path().display());
        Self { config, store, keys }
    }

    /// Account service
    pub fn accounts(&self) -> Accounts<'_, CliStore> {
        Accounts::new(&self.store, self.keys.clone())
    }

    /// Post listing
    pub fn board(&self) -> PostBoard<'_, CliStore> {
        PostBoard::new(&self.store, self.keys.clone())
    }

    /// Reaction service
    pub fn engagement(&self) -> EngagementStore<'_, CliStore> {
        EngagementStore::new(&self.store, self.keys.clone())
    }

    /// Comment threads
    pub fn comment_board(&self) -> CommentBoard<'_, CliStore> {
        CommentBoard::new(&self.store, self.keys.clone())
    }
}
