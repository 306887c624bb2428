//! Command handlers and dispatch.
//!
//! Each handler checks its argument count, runs one operation against the
//! book, and returns the reply text. Errors carry their user-facing
//! message and are rendered at the dispatch boundary, so no command can
//! take the session down.

use crate::commands::parser::{CommandKind, ParsedLine};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::Local;

/// A handler's reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; the session continues.
    Message(String),
    /// Text to print; the session saves and ends.
    Farewell(String),
}

/// The reply that ends a session.
pub fn farewell() -> Reply {
    Reply::Farewell("Good bye!".to_string())
}

/// Executes one tokenized line against the book and renders the reply.
///
/// A `None` line (blank input) and every command error come back as a
/// plain message; only `close`/`exit` produce a farewell.
pub fn dispatch(line: Option<ParsedLine>, book: &mut AddressBook) -> Reply {
    match execute(line, book) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::debug!("Command failed: {err}");
            Reply::Message(err.to_string())
        }
    }
}

fn execute(line: Option<ParsedLine>, book: &mut AddressBook) -> CommandResult<Reply> {
    let line = line.ok_or(CommandError::MissingName)?;
    let kind = match CommandKind::parse(&line.verb) {
        Some(kind) => kind,
        None => return Ok(Reply::Message("Invalid command.".to_string())),
    };

    let args = line.args.as_slice();
    let reply = match kind {
        CommandKind::Hello => Reply::Message("How can I help you?".to_string()),
        CommandKind::Add => Reply::Message(add_contact(args, book)?),
        CommandKind::Change => Reply::Message(change_contact(args, book)?),
        CommandKind::Phone => Reply::Message(show_phone(args, book)?),
        CommandKind::All => Reply::Message(show_all(book)),
        CommandKind::AddBirthday => Reply::Message(add_birthday(args, book)?),
        CommandKind::ShowBirthday => Reply::Message(show_birthday(args, book)?),
        CommandKind::Birthdays => Reply::Message(birthdays(args, book)?),
        CommandKind::Exit => farewell(),
    };
    Ok(reply)
}

fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone] => (name, phone),
        _ => return Err(CommandError::Usage("Give me name and phone please.")),
    };
    let message = if book.find(name).is_none() {
        book.add_record(Record::new(name.as_str()));
        "Contact added."
    } else {
        "Contact updated."
    };
    // The record is registered before the phone is validated, so a bad
    // number still leaves the contact in the book.
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_phone(phone)?;
    Ok(message.to_string())
}

fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, old, new) = match args {
        [name, old, new] => (name, old, new),
        _ => {
            return Err(CommandError::Usage(
                "Give me name, old phone, and new phone please.",
            ))
        }
    };
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old, new)?;
    Ok("Phone number updated.".to_string())
}

fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => name,
        _ => return Err(CommandError::Usage("Give me name please.")),
    };
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(record.phone_list())
}

fn show_all(book: &AddressBook) -> String {
    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, date) = match args {
        [name, date] => (name, date),
        _ => return Err(CommandError::Usage("Give me name and birthday please.")),
    };
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => name,
        _ => return Err(CommandError::Usage("Give me name please.")),
    };
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(record.birthday_line())
}

fn birthdays(args: &[String], book: &AddressBook) -> CommandResult<String> {
    if !args.is_empty() {
        return Err(CommandError::Usage("This command does not require arguments."));
    }
    let today = Local::now().date_naive();
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| format!("Upcoming birthday: {} on {}", u.name, u.congratulation_date))
        .collect();
    Ok(lines.join("\n"))
}
