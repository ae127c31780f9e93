use std::fmt;

use songstagram_core::{
    error::Error,
    link::SpotifyLink,
    view::{ReleaseType, View, ViewKind},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Search(String),
    Open(View),
    Back(usize),
    Forward,
    Refresh,
    History,
    Show,
    Quit,
}

#[derive(Debug)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidCount(String),
    View(Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command"),
            Self::Unknown(name) => write!(f, "Unknown command: {name}"),
            Self::MissingArgument(name) => write!(f, "Missing argument: {name}"),
            Self::InvalidCount(count) => write!(f, "Invalid count: {count}"),
            Self::View(err) => err.fmt(f),
        }
    }
}

impl From<Error> for CommandError {
    fn from(err: Error) -> CommandError {
        CommandError::View(err)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> CommandError {
        CommandError::View(err.into())
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match name {
            "" => Err(CommandError::Empty),
            "type" => Ok(Command::Type(rest.to_string())),
            "search" if rest.is_empty() => Err(CommandError::MissingArgument("query")),
            "search" => Ok(Command::Search(rest.to_string())),
            "open" => Ok(Command::Open(parse_view(rest)?)),
            "back" if rest.is_empty() => Ok(Command::Back(1)),
            "back" => rest
                .parse()
                .map(Command::Back)
                .map_err(|_| CommandError::InvalidCount(rest.to_string())),
            "forward" => Ok(Command::Forward),
            "refresh" => Ok(Command::Refresh),
            "history" => Ok(Command::History),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

/// Accepts a JSON view, a Spotify link, or `<kind> [arg] [filter]`.
fn parse_view(input: &str) -> Result<View, CommandError> {
    if input.starts_with('{') {
        return Ok(serde_json::from_str(input)?);
    }
    if let Some(link) = SpotifyLink::parse(input) {
        return Ok(link.into_view());
    }
    let mut parts = input.split_whitespace();
    let kind: ViewKind = parts
        .next()
        .ok_or(CommandError::MissingArgument("kind"))?
        .parse()?;
    let arg = parts.next();
    let filter = parts.next().map(str::parse::<ReleaseType>).transpose()?;
    Ok(View::from_parts(kind, arg, filter)?)
}
