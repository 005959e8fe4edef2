//! `quicknote` terminal front end.
//!
//! # Responsibility
//! - Resolve host configuration (db path, logging, display offset).
//! - Forward user intents to `NoteStore` and render the resulting view.

mod args;
mod prompt;
mod render;

use anyhow::{anyhow, Context};
use args::{Cli, Command};
use chrono::FixedOffset;
use clap::Parser;
use log::info;
use prompt::{unescape_newlines, AssumeYes, TerminalInteraction};
use quicknote_core::db::open_db;
use quicknote_core::{
    default_log_level, init_logging, ClearOutcome, EditOutcome, Interaction, NoteDraft, NoteStore,
    NoteStoreError, SqliteKvStore,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DB_DIR: &str = ".quicknote";
const DEFAULT_DB_FILE: &str = "notes.sqlite3";
const EMPTY_FIELDS_MESSAGE: &str = "Title and content must not be empty.";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let db_path = resolve_db_path(cli.db)?;
    if let Command::Path = cli.command {
        println!("{}", db_path.display());
        return Ok(());
    }
    let offset = FixedOffset::east_opt(cli.utc_offset * 3600)
        .ok_or_else(|| anyhow!("invalid utc offset: {}", cli.utc_offset))?;
    run_store_command(cli.command, &db_path, offset)
}

fn run_store_command(
    command: Command,
    db_path: &Path,
    offset: FixedOffset,
) -> anyhow::Result<()> {
    ensure_parent_dir(db_path)?;
    let conn = open_db(db_path)
        .with_context(|| format!("failed to open notes database `{}`", db_path.display()))?;
    let mut store = NoteStore::with_backend(SqliteKvStore::try_new(&conn)?);
    let mut ui = TerminalInteraction::stdio();
    info!(
        "event=cli_command module=cli status=start notes={}",
        store.len()
    );

    match command {
        Command::Add {
            title,
            tag,
            content,
        } => {
            let draft = NoteDraft::new(title, tag, unescape_newlines(&content));
            match store.add(&draft) {
                Ok(note) => println!("Added note {}", note.id),
                Err(NoteStoreError::Validation(_)) => ui.notify(EMPTY_FIELDS_MESSAGE),
                Err(err) => return Err(err.into()),
            }
        }
        Command::List { search, sort } => {
            print!("{}", render::render_notes(&store.query(&search, sort), offset));
        }
        Command::Edit { id } => match store.edit(&id, &mut ui) {
            Ok(EditOutcome::Updated(note)) => println!("Updated {}", note.id),
            Ok(EditOutcome::Cancelled) => println!("Edit cancelled."),
            // Already reported through the interaction provider.
            Err(NoteStoreError::Validation(_)) => {}
            Err(err) => return Err(err.into()),
        },
        Command::Delete { id } => {
            if store.remove(&id)? {
                println!("Deleted {id}");
            } else {
                println!("Note {id} not found");
            }
        }
        Command::Clear { yes } => {
            let outcome = if yes {
                store.clear(&mut AssumeYes(&mut ui))?
            } else {
                store.clear(&mut ui)?
            };
            match outcome {
                ClearOutcome::Cleared(count) => println!("Deleted {count} note(s)."),
                ClearOutcome::Cancelled => println!("Nothing deleted."),
                ClearOutcome::AlreadyEmpty => println!("No notes to delete."),
            }
        }
        Command::Path => println!("{}", db_path.display()),
    }
    Ok(())
}

fn resolve_db_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("HOME not set; pass --db or set QUICKNOTE_DB_PATH"))?;
    Ok(PathBuf::from(home).join(DEFAULT_DB_DIR).join(DEFAULT_DB_FILE))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display())),
        _ => Ok(()),
    }
}
