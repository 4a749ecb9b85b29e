//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands::{self, Reaction};
use gossup::core::GossupError;
use gossup::core::models::{FeedMode, ProfileSort};
use gossup::core::services::{ProfileEdit, SignupForm};
use gossup::output::{OperationResult, OutputMode};

/// gossup - anonymous campus feed
#[derive(Parser, Debug)]
#[command(
    name = "gossup",
    version,
    about = "Anonymous campus feed",
    long_about = "Post anonymously, react with likes, dislikes and verifications,\n\
                  and browse what's trending around campus."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an anonymous account and sign in
    Signup {
        /// Anonymous username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm_password: String,

        /// College
        #[arg(long)]
        college: Option<String>,

        /// Avatar glyph
        #[arg(long)]
        avatar: Option<String>,

        /// Agree to the terms and conditions
        #[arg(long)]
        agree_terms: bool,
    },

    /// Sign out
    Logout,

    /// Show your profile and posts
    Profile {
        /// Post order: popular, latest, oldest
        #[arg(short, long, default_value = "popular")]
        sort: ProfileSort,
    },

    /// Change username, college or avatar
    EditProfile {
        /// New username (once per month)
        #[arg(short, long)]
        name: Option<String>,

        /// New college (empty to clear)
        #[arg(long)]
        college: Option<String>,

        /// New avatar glyph
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Show the feed
    Feed {
        /// Feed order: trending, latest
        #[arg(short, long)]
        mode: Option<FeedMode>,

        /// Seed for the trending shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Publish a post (+10 points)
    Post {
        /// Post text
        content: String,
    },

    /// Toggle a like
    Like {
        /// Post ID
        post_id: String,
    },

    /// Toggle a dislike
    Dislike {
        /// Post ID
        post_id: String,
    },

    /// Toggle a verification (+5 points when turned on)
    Verify {
        /// Post ID
        post_id: String,
    },

    /// Share a post
    Share {
        /// Post ID
        post_id: String,
    },

    /// Show a post's comments
    Comments {
        /// Post ID
        post_id: String,
    },

    /// Comment on a post
    Comment {
        /// Post ID
        post_id: String,

        /// Comment text
        text: String,
    },

    /// Reply to a comment
    Reply {
        /// Post ID
        post_id: String,

        /// Comment ID
        comment_id: String,

        /// Reply text
        text: String,
    },

    /// Like a comment or reply
    LikeComment {
        /// Post ID
        post_id: String,

        /// Comment ID
        comment_id: String,

        /// Reply ID, to like a reply instead of the comment
        #[arg(short, long)]
        reply: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match dispatch(cli.command, output_mode) {
        Err(err) => match err.downcast_ref::<GossupError>() {
            Some(GossupError::NotAuthenticated { action }) => {
                OperationResult::failed(format!(
                    "Sign in to {action}. Run 'gossup signup' to create an account."
                ))
                .render(output_mode);
                std::process::exit(1);
            },
            _ => Err(err),
        },
        ok => ok,
    }
}

fn dispatch(command: Option<Command>, output_mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Some(Command::Signup {
            username,
            password,
            confirm_password,
            college,
            avatar,
            agree_terms,
        }) => commands::signup(
            SignupForm {
                username,
                password,
                confirm_password,
                college,
                avatar,
                agree_terms,
            },
            output_mode,
        ),
        Some(Command::Logout) => commands::logout(output_mode),
        Some(Command::Profile { sort }) => commands::profile(sort, output_mode),
        Some(Command::EditProfile {
            name,
            college,
            avatar,
        }) => commands::edit_profile(
            ProfileEdit {
                anonymous_name: name,
                college,
                avatar,
            },
            output_mode,
        ),
        Some(Command::Feed { mode, seed }) => commands::feed(mode, seed, output_mode),
        Some(Command::Post { content }) => commands::post(&content, output_mode),
        Some(Command::Like { post_id }) => commands::react(Reaction::Like, &post_id, output_mode),
        Some(Command::Dislike { post_id }) => {
            commands::react(Reaction::Dislike, &post_id, output_mode)
        },
        Some(Command::Verify { post_id }) => {
            commands::react(Reaction::Verify, &post_id, output_mode)
        },
        Some(Command::Share { post_id }) => commands::react(Reaction::Share, &post_id, output_mode),
        Some(Command::Comments { post_id }) => commands::comments(&post_id, output_mode),
        Some(Command::Comment { post_id, text }) => {
            commands::comment(&post_id, &text, output_mode)
        },
        Some(Command::Reply {
            post_id,
            comment_id,
            text,
        }) => commands::reply(&post_id, &comment_id, &text, output_mode),
        Some(Command::LikeComment {
            post_id,
            comment_id,
            reply,
        }) => commands::like_comment(&post_id, &comment_id, reply.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("gossup v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("gossup v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'gossup --help' for usage");
                println!("Run 'gossup signup' to get started");
            }
            Ok(())
        },
    }
}
