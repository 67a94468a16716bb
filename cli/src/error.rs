//! Host error handling
//!
//! The core never fails; these errors only cover reading and interpreting
//! event scripts and writing reports.

use thiserror::Error;

/// Problem with a single script line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects an argument")]
    MissingArgument { line: usize, command: &'static str },

    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument { line: usize, command: &'static str },

    #[error("line {line}: invalid width '{value}'")]
    InvalidWidth { line: usize, value: String },
}

impl ScriptError {
    /// 1-based line the error refers to
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::MissingArgument { line, .. }
            | ScriptError::UnexpectedArgument { line, .. }
            | ScriptError::InvalidWidth { line, .. } => *line,
        }
    }
}

/// Host error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Failed to read script from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output")]
    Write(#[from] std::io::Error),

    #[error("Failed to encode report")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for host operations
pub type CliResult<T> = Result<T, CliError>;
