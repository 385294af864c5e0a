use chrono::Weekday;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Malformed distribution literal '{literal}': {reason}")]
    Format { literal: String, reason: String },

    #[error("No {expected} found for {kind} '{name}'")]
    Lookup {
        kind: String,
        name: String,
        expected: String,
    },

    #[error("Roster for {day} has {count} assignees, expected exactly 2")]
    Shape { day: Weekday, count: usize },

    #[error("Invalid split request: {0}")]
    Config(String),

    #[error("Keyfile error: {0}")]
    Keyfile(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SplitError {
    pub(crate) fn lookup(kind: &str, name: &str, expected: &str) -> Self {
        SplitError::Lookup {
            kind: kind.to_string(),
            name: name.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub type SplitResult<T> = Result<T, SplitError>;
