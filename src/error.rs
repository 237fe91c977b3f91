//! Error types for command evaluation and configuration.

use thiserror::Error;

/// User-visible message for a `PLACE` whose arguments fail to parse.
pub const INVALID_ARGUMENTS_MESSAGE: &str = "One or more invalid arguments.";

/// User-visible message for an unknown command or a known one with the wrong arity.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command or invalid argument count.";

/// Why a single command was not applied.
///
/// None of these are fatal: the interpreter absorbs each one and moves on to
/// the next line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid direction name `{0}`")]
    InvalidDirectionName(String),

    #[error("invalid integer argument `{0}`")]
    InvalidIntegerArgument(String),

    /// The candidate state would leave the table; the transition was rolled back.
    #[error("position ({x}, {y}) is off the table")]
    OffTableAfterTransition { x: i32, y: i32 },

    #[error("unrecognized command `{name}` with {arity} argument(s)")]
    UnrecognizedCommand { name: String, arity: usize },
}

impl CommandError {
    /// The line to emit for this error, if any.
    ///
    /// Both argument parse failures collapse into one message. Bounds
    /// violations are silent.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CommandError::InvalidDirectionName(_) | CommandError::InvalidIntegerArgument(_) => {
                Some(INVALID_ARGUMENTS_MESSAGE)
            }
            CommandError::UnrecognizedCommand { .. } => Some(UNKNOWN_COMMAND_MESSAGE),
            CommandError::OffTableAfterTransition { .. } => None,
        }
    }
}

/// Errors raised while loading a [`RobotConfig`](crate::RobotConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table size must be at least 1, got {0}")]
    InvalidTableSize(i32),

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
