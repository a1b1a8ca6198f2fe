//! Host protocol errors.

use regent_core::EncodingError;

/// Errors that can occur while handling host protocol input.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A command was given the wrong number of arguments.
    #[error("{command} expects {expected} arguments, found {found}")]
    WrongArgumentCount {
        /// The command keyword.
        command: &'static str,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// An argument that should be an integer is not.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// The token that failed to parse.
        value: String,
    },

    /// A color, piece code, or move text could not be decoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The `setoption` command is missing its `name` or `value` keyword.
    #[error("malformed setoption command: expected `setoption name <name> value <value>`")]
    MalformedSetOption,

    /// The option name is not recognized.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// The option value could not be parsed.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The value that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
