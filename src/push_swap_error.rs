//! PushSwapError: unified error type for push-swap public APIs
//!
//! The sorting core itself cannot fail on validated input; every variant here
//! comes from the surrounding glue (argument parsing, the checker's
//! instruction stream, configuration).

use thiserror::Error;

/// Unified error type for push-swap operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushSwapError {
    /// A checker input line is not one of the eleven instruction tokens.
    #[error("Malformed instruction on line {line}: `{token}`")]
    MalformedInstruction { line: usize, token: String },
    /// A token is not an operation name.
    #[error("Unknown operation: `{0}`")]
    UnknownOp(String),
    /// A word in the argument list is not a signed 32-bit integer literal.
    #[error("Invalid number: `{0}`")]
    InvalidNumber(String),
    /// An argument contained no numbers at all.
    #[error("Empty argument")]
    EmptyArgument,
    /// The same value appeared twice in the input.
    #[error("Duplicate value: {0}")]
    DuplicateValue(i32),
    /// Reading the instruction stream failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// A solver configuration failed validation.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(&'static str),
    /// A rank is held by more than one stack element.
    #[error("Stack invariant broken: rank {0} appears more than once")]
    DuplicateRank(usize),
    /// A rank in `0..n` is held by no stack element.
    #[error("Stack invariant broken: rank {0} is missing")]
    MissingRank(usize),
}

impl From<std::io::Error> for PushSwapError {
    fn from(err: std::io::Error) -> Self {
        PushSwapError::Io(err.to_string())
    }
}
