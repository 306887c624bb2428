//! Assistant bot for a personal address book with birthday reminders.
//!
//! Contacts live in an in-memory [`models::AddressBook`] with validated
//! fields, persisted as a JSON snapshot between sessions and driven
//! through a line-oriented prompt.
//!
//! # Architecture
//!
//! - [`domain`] - validated value objects (name, phone number, birthday)
//! - [`models`] - the record and address book data model
//! - [`storage`] - snapshot persistence behind [`storage::SnapshotStore`]
//! - [`commands`] - line parsing, command handlers, and the REPL loop
//! - [`config`] - environment-based configuration
//! - [`error`] - crate-wide error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{run_repl, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{
    CommandError, CommandResult, ConfigError, ConfigResult, StorageError, StorageResult,
};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::{JsonSnapshotStore, SnapshotStore};

use std::io;
use tracing_subscriber::EnvFilter;

/// Loads configuration, restores the address book, and runs the prompt
/// on stdin/stdout until the session ends.
///
/// Logging goes to stderr so stdout carries nothing but the prompt and
/// replies.
pub fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting assistant bot");

    let store = JsonSnapshotStore::new(&config.book_path);
    let mut book = store.load()?;
    tracing::info!(
        "Restored {} record(s) from {}",
        book.len(),
        store.path().display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(stdin.lock(), stdout.lock(), &mut book, &store)?;

    tracing::info!("Session ended");
    Ok(())
}
