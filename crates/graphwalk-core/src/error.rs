//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing input file, malformed edge record, unknown node)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad input or unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown search mode: {0} (expected: dfs or bfs)")]
    UnknownMode(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed edge record {record}: expected 2 fields, found {fields}")]
    MalformedInput { record: usize, fields: usize },

    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a name that is not in the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        GraphError::NodeNotFound { name: name.into() }
    }

    /// Create an error for an I/O failure on a specific file
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownMode(_)
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::MalformedInput { .. }
            | GraphError::NodeNotFound { .. }
            | GraphError::FileNotFound { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownMode(_) => "unknown_mode",
            GraphError::UsageError(_) => "usage_error",
            GraphError::MalformedInput { .. } => "malformed_input",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::FileNotFound { .. } => "file_not_found",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
