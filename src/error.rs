//! Error types for shell operations.
//!
//! The `CliError` enum represents every recoverable failure while a statement
//! is parsed, dispatched or executed. None of them ends the session.

use core::fmt;

/// CLI error type.
///
/// Statement-level errors are reported to the user and the shell keeps running
/// with whatever state earlier statements left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Typed word is a prefix of more than one sibling command
    AmbiguousCommand {
        /// The word as typed
        token: String,
        /// Full names of every matching sibling
        candidates: Vec<String>,
    },

    /// First word of a statement matched no command
    CommandNotFound(String),

    /// Path token matched no schema node
    PathNotFound {
        /// The token as typed
        token: String,
    },

    /// Path token is a prefix of more than one schema node
    AmbiguousPath {
        /// The token as typed
        token: String,
        /// Names of every matching schema node
        candidates: Vec<String>,
    },

    /// A list was selected without a key value
    ListKeyRequired {
        /// List name
        list: String,
    },

    /// Leaf nodes cannot be entered in configuration mode
    NotNavigable {
        /// Leaf name
        name: String,
    },

    /// Configuration path exceeds MAX_PATH_DEPTH
    PathTooDeep,

    /// Line exceeds MAX_INPUT or MAX_TOKENS
    BufferFull,

    /// Datastore lookup failed
    Datastore(String),

    /// Settings, schema or data file could not be loaded
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AmbiguousCommand { token, candidates } => write!(
                f,
                "Ambiguous command '{}', matches are: {}",
                token,
                candidates.join(", ")
            ),
            CliError::CommandNotFound(word) => write!(f, "Unknown command '{}'", word),
            CliError::PathNotFound { token } => write!(f, "No such path element '{}'", token),
            CliError::AmbiguousPath { token, candidates } => write!(
                f,
                "Ambiguous path element '{}', matches are: {}",
                token,
                candidates.join(", ")
            ),
            CliError::ListKeyRequired { list } => write!(f, "List '{}' requires a key", list),
            CliError::NotNavigable { name } => write!(f, "Cannot enter leaf '{}'", name),
            CliError::PathTooDeep => write!(f, "Path too deep"),
            CliError::BufferFull => write!(f, "Input too long"),
            CliError::Datastore(msg) => write!(f, "Datastore error: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}
