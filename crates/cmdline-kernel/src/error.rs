//! Error types for the shell core.
//!
//! None of these escape the dispatcher: every failure is rendered as text for
//! the session to display and record.

use std::path::PathBuf;

use thiserror::Error;

use crate::commands::ParamKind;

/// Failure to bind string tokens to a command's declared parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error("Invalid number of arguments. Expected {expected}, got {actual}.\nUsage: {usage}")]
    Arity {
        expected: usize,
        actual: usize,
        usage: String,
    },

    #[error("cannot convert argument {position} ('{name}') value '{value}' to {kind}")]
    Conversion {
        /// 1-based position of the offending token.
        position: usize,
        name: String,
        value: String,
        kind: ParamKind,
    },
}

/// Failure of a directory cursor transition. The cursor is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CursorError {
    #[error("Cannot navigate above project '{root}' folder.")]
    Boundary { root: String },

    #[error("Cannot set current directory to an empty string.")]
    EmptyArgument,

    #[error("Invalid directory segment '{segment}'.")]
    InvalidSegment { segment: String },

    /// `path` is the display form relative to the project.
    #[error("Directory '{path}' does not exist.")]
    NotFound { path: String },

    #[error("Directory '{segment}' does not exist in the current path '{current}'.")]
    NotFoundIn { segment: String, current: String },
}

/// Failure raised while invoking a command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Bind(#[from] BindError),

    /// A fault raised by the handler itself.
    #[error("{0}")]
    Fault(String),
}

impl CommandError {
    /// Create a handler fault from any displayable message.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(message.into())
    }
}

/// Failure while discovering a provider's commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoveryError {
    #[error("provider '{provider}' could not be instantiated: {reason}")]
    Instantiate { provider: String, reason: String },

    #[error("provider '{provider}' failed to register: {reason}")]
    Register { provider: String, reason: String },

    #[error("invalid command '{scope} {name}': {reason}")]
    InvalidCommand {
        scope: String,
        name: String,
        reason: String,
    },
}

/// Failure of the key-value persistence service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
