//! Command-line surface.

use clap::{Parser, Subcommand};
use quicknote_core::SortOrder;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quicknote", version, about = "Keep short local notes")]
pub struct Cli {
    /// Notes database file (default: ~/.quicknote/notes.sqlite3).
    #[arg(long, env = "QUICKNOTE_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "QUICKNOTE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (default depends on build mode).
    #[arg(long, env = "QUICKNOTE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Hours east of UTC used when displaying timestamps.
    #[arg(
        long,
        env = "QUICKNOTE_UTC_OFFSET",
        global = true,
        default_value_t = 7,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-12..=14)
    )]
    pub utc_offset: i32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a note.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        tag: String,
        /// Body text; a literal `\n` becomes a line break.
        #[arg(long)]
        content: String,
    },
    /// Show notes, optionally filtered and sorted.
    List {
        /// Case-insensitive text matched against title, content and tag.
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, default_value_t = SortOrder::NewestFirst)]
        sort: SortOrder,
    },
    /// Edit title, tag and content through prompts.
    Edit { id: String },
    /// Delete one note.
    Delete { id: String },
    /// Delete every note after confirmation.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the database path.
    Path,
}
