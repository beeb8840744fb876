//! Error types for BFM with categorization:
//!
//! - **Validation errors**: missing required arguments, registration
//!   collisions (exit code 1)
//! - **System errors**: handler failures, IO inside handlers (exit code 2)
//! - **Not found**: unknown command names (exit code 3)
//!
//! Tokenization and argument resolution never fail, so neither appears here.

use std::fmt;

/// Top-level error type for the dispatch core.
///
/// Handler errors stay opaque: the dispatcher returns them unchanged and the
/// read loop prints whatever the handler reported.
#[derive(Debug)]
pub enum Error {
    /// No registered command matches the typed name
    CommandNotFound(String),
    /// One or more required arguments were absent or empty
    MissingRequiredArgs {
        /// Command whose argument list failed validation
        command: String,
        /// Base names of the unsatisfied arguments, in spec order
        missing: Vec<String>,
    },
    /// A command was registered under a name that is already taken
    DuplicateCommand(String),
    /// Two arguments of one command share a name or alias
    DuplicateArgument {
        /// Command whose argument table collides
        command: String,
        /// The identifier declared more than once
        identifier: String,
    },
    /// Opaque failure reported by a command handler
    Handler(anyhow::Error),
}

// Convenience constructors using functional patterns
impl Error {
    /// Create a not-found error for an unknown command name.
    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound(name.into())
    }

    /// Create a validation error for unsatisfied required arguments.
    pub fn missing_required_args(command: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingRequiredArgs {
            command: command.into(),
            missing,
        }
    }

    /// Create a registration error for a colliding command name.
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::DuplicateCommand(name.into())
    }

    /// Create a registration error for a colliding argument identifier.
    pub fn duplicate_argument(command: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::DuplicateArgument {
            command: command.into(),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandNotFound(name) => {
                write!(f, "Couldn't find any command named '{name}'")
            }
            Self::MissingRequiredArgs { command, missing } => write!(
                f,
                "There are missing arguments in your '{command}' command: {}",
                missing.join(", ")
            ),
            Self::DuplicateCommand(name) => {
                write!(f, "Command '{name}' is already registered")
            }
            Self::DuplicateArgument {
                command,
                identifier,
            } => write!(
                f,
                "Argument identifier '{identifier}' is declared more than once in command '{command}'"
            ),
            Self::Handler(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Handler(err) => err.source(),
            _ => None,
        }
    }
}

impl Error {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (validation, registration collision)
    /// - 2: System error (handler failure)
    /// - 3: Not found (unknown command)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingRequiredArgs { .. }
            | Self::DuplicateCommand(_)
            | Self::DuplicateArgument { .. } => 1,
            Self::Handler(_) => 2,
            Self::CommandNotFound(_) => 3,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Handler(err)
    }
}
