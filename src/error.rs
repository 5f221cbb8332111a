//! Error types for the red-blue-nim crate.
//!
//! Two families live here:
//! - Input-level errors (`InvalidMoveInput`, `IllegalMove` during a human
//!   turn) are recovered by the game loop, which re-prompts.
//! - Contract violations (`NoLegalMove`, `IllegalMove` from the search,
//!   `InvalidConfiguration`) terminate the session.

use thiserror::Error;

use crate::core::{Move, RuleVariant};

/// Main error type for the red-blue-nim crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {mv}: only {red} red and {blue} blue marbles remain")]
    IllegalMove { mv: Move, red: u32, blue: u32 },

    #[error("invalid move input '{input}': {reason}")]
    InvalidMoveInput { input: String, reason: String },

    #[error("no legal move for {variant} play with {red} red and {blue} blue marbles")]
    NoLegalMove {
        red: u32,
        blue: u32,
        variant: RuleVariant,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("move input aborted")]
    InputAborted,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the game loop recovers from this error by asking for another move.
    #[must_use]
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidMoveInput { .. } | Error::IllegalMove { .. }
        )
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
