//! Error types for the OEE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the configuration boundary is fallible: the computation core clamps
//! degenerate inputs to zero instead of returning errors, so a dashboard in
//! a "no data yet" state renders zeros rather than failures.

use thiserror::Error;

/// The main error type for the OEE engine.
///
/// # Example
///
/// ```
/// use oee_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shifts.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The shift catalog contained an invalid definition.
    #[error("Invalid shift catalog: {message}")]
    InvalidCatalog {
        /// A description of what made the catalog invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
