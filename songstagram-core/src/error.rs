use std::{error, fmt, io};

use crate::view::ViewKind;

#[derive(Debug)]
pub enum Error {
    UnknownViewKind(String),
    UnknownReleaseType(String),
    InvalidPayload { kind: ViewKind, reason: &'static str },
    ConfigDirUnavailable,
    JsonError(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownViewKind(name) => write!(f, "Unknown view kind: {name}"),
            Self::UnknownReleaseType(name) => write!(f, "Unknown release type: {name}"),
            Self::InvalidPayload { kind, reason } => {
                write!(f, "Invalid payload for {kind}: {reason}")
            }
            Self::ConfigDirUnavailable => write!(f, "Config directory is not available"),
            Self::JsonError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}
