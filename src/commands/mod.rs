//! Line-oriented command interface.
//!
//! The REPL reads one command per line, dispatches it against the
//! in-memory book, and prints one reply per command. The snapshot is
//! saved exactly once, when the session ends.

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, Reply};
pub use parser::{parse_line, CommandKind, ParsedLine};

use crate::models::AddressBook;
use crate::storage::SnapshotStore;
use std::io::{BufRead, Write};

/// Runs the interactive session until `close`/`exit` or end of input.
///
/// End of input behaves like `close`: the book is saved and the farewell
/// printed. The prompt is flushed without a trailing newline so the user
/// types on the same line.
pub fn run_repl<R, W>(
    mut input: R,
    mut output: W,
    book: &mut AddressBook,
    store: &dyn SnapshotStore,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        let reply = if input.read_line(&mut line)? == 0 {
            tracing::info!("Input closed, ending session");
            handlers::farewell()
        } else {
            dispatch(parse_line(&line), book)
        };

        match reply {
            Reply::Message(text) => writeln!(output, "{text}")?,
            Reply::Farewell(text) => {
                store.save(book)?;
                writeln!(output, "{text}")?;
                return Ok(());
            }
        }
    }
}
