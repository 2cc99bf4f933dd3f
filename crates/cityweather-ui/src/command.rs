//! Line commands typed at the prompt.
//!
//! Row and suggestion numbers are shown 1-based on screen and converted to
//! 0-based indices here.

use cityweather_cities::SortKey;
use thiserror::Error;

/// Rows moved by `down`/`up` without a count
pub const DEFAULT_SCROLL_STEP: isize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search term, as if typed
    Search(String),
    PickSuggestion(usize),
    Sort(SortKey),
    /// Move the viewport; negative is up
    Scroll(isize),
    /// Primary selection of a row
    Open(usize),
    /// Secondary selection of a row
    Link(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` needs a number")]
    MissingNumber { command: &'static str },

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown column: {0} (expected name, country or timezone)")]
    UnknownColumn(String),

    #[error("Empty command")]
    Empty,
}

pub const HELP: &str = "\
Commands:
  /<text> | search <text>   filter by name (search alone clears)
  pick <n>                  choose suggestion n
  sort name|country|timezone
  down [n] | up [n]         scroll the listing
  open <n>                  show weather for row n
  link <n>                  open the link for row n
  refresh                   fetch weather again (detail view)
  help | quit";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    // Everything after the slash is the term, spaces included.
    if let Some(term) = line.trim_start().strip_prefix('/') {
        return Ok(Command::Search(term.to_string()));
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "pick" | "p" => Ok(Command::PickSuggestion(one_based(rest, "pick")?)),
        "sort" => rest
            .parse::<SortKey>()
            .map(Command::Sort)
            .map_err(|_| CommandError::UnknownColumn(rest.to_string())),
        "down" | "d" => Ok(Command::Scroll(step(rest)?)),
        "up" | "u" => Ok(Command::Scroll(-step(rest)?)),
        "open" | "o" => Ok(Command::Open(one_based(rest, "open")?)),
        "link" | "l" => Ok(Command::Link(one_based(rest, "link")?)),
        "refresh" | "r" => Ok(Command::Refresh),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn one_based(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingNumber { command });
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

fn step(arg: &str) -> Result<isize, CommandError> {
    if arg.is_empty() {
        return Ok(DEFAULT_SCROLL_STEP);
    }
    arg.parse::<isize>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| CommandError::InvalidNumber(arg.to_string()))
}
