//! Input line tokenizing and verb recognition.

/// The commands the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl CommandKind {
    /// Maps a verb to its command, ignoring case.
    ///
    /// `close` and `exit` are the same command. Returns `None` for
    /// anything unrecognized.
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_lowercase().as_str() {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "close" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A tokenized input line: the verb and its arguments.
///
/// Arguments keep their original case; only verb recognition is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub verb: String,
    pub args: Vec<String>,
}

/// Splits a line on whitespace into a verb and arguments.
///
/// Returns `None` for a blank or whitespace-only line.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let verb = tokens.next()?;
    Some(ParsedLine {
        verb,
        args: tokens.collect(),
    })
}
