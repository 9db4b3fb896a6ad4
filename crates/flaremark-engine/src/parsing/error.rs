use thiserror::Error;

use super::registry::RuleId;

/// Failures raised while parsing.
///
/// Only [`recoverable`](ParseError::is_recoverable) errors are turned into
/// `Error` nodes by error containment; the rest abort the whole parse.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid document: no block rule matched at offset {offset}")]
    InvalidDocument { offset: usize },

    #[error("Unknown rule `{0}`")]
    UnknownRule(RuleId),

    #[error("Invalid escape sequence at offset {offset}: {source}")]
    Escape {
        offset: usize,
        #[source]
        source: EscapeError,
    },
}

impl ParseError {
    /// Whether a containing dispatch may replace this failure with an
    /// `Error` node and keep going.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ParseError::Escape { .. } => true,
            ParseError::InvalidDocument { .. } | ParseError::UnknownRule(_) => false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("`\\{designator}` needs {expected} hex digits")]
    MissingHexDigits { designator: char, expected: usize },

    #[error("`{0}` is not a valid code point")]
    InvalidCodePoint(String),
}
