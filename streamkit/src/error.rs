//! Error types for streamkit.
//!
//! The transform operations themselves never fail: empty input yields empty
//! output and caller errors pass through the `try_*` variants untouched. The
//! errors below belong to the layers around them:
//!
//! - [`RecordError`] - Field paths and matchers over JSON records
//! - [`ConfigError`] - Environment configuration
//! - [`CliError`] - Top-level command-line errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Record Errors
// =============================================================================

/// Errors while building record adapters.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Empty path or empty path segment.
    #[error("Invalid field path '{0}'")]
    InvalidPath(String),

    /// Regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Literal is not valid JSON.
    #[error("Invalid JSON literal '{literal}': {source}")]
    InvalidLiteral {
        literal: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but cannot be interpreted.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level errors of the `streamkit` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read input or write output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON, or output failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record adapter error.
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Input parsed but is not an array of records.
    #[error("Expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for record adapters.
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
