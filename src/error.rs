//! Error types for the database shell.
//!
//! The `Display` text of every recoverable error is exactly the message the
//! shell prints back to the user.

use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, Error>;

/// A dot-prefixed input that is not a known meta-command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'")]
    Unrecognized(String),
}

/// Errors raised while turning a line of text into a [`Statement`](crate::Statement)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    /// Malformed `insert` arguments
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    /// The line does not start with a known statement keyword
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
}

/// Errors raised while applying a statement to the table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteError {
    /// Insert attempted with every row slot already in use
    #[error("Error: Table full.")]
    TableFull,
}

/// Any error the shell can run into
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    MetaCommand(#[from] MetaCommandError),

    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl Error {
    /// Whether the shell reports this error and keeps reading input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
