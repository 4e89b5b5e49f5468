//! Error types for the sun events service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the request validation failures and startup failures of the service.

use thiserror::Error;

/// The main error type for the sun events service.
///
/// Request-path failures map onto HTTP responses in [`crate::api`]; the
/// configuration and server variants only surface during startup.
///
/// # Example
///
/// ```
/// use sun_events::error::SunError;
///
/// let error = SunError::MissingParameter {
///     name: "latitude".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing parameter: latitude");
/// ```
#[derive(Debug, Error)]
pub enum SunError {
    /// The request used a method other than GET.
    #[error("Method not allowed: {method}")]
    MethodNotAllowed {
        /// The rejected HTTP method.
        method: String,
    },

    /// The request path did not split into the expected number of segments.
    #[error("Malformed path: expected 4 segments, found {segments}")]
    MalformedPath {
        /// The number of segments the path actually had.
        segments: usize,
    },

    /// A `lat`/`lon` token could not be parsed as a number.
    #[error("Invalid parameter '{token}': {message}")]
    InvalidParameter {
        /// The offending path segment.
        token: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A `lat`/`lon` token was absent from the path.
    #[error("Missing parameter: {name}")]
    MissingParameter {
        /// Which coordinate was missing.
        name: String,
    },

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

    /// The HTTP server could not bind or stopped with an I/O error.
    #[error("Server error: {message}")]
    Server {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return SunError.
pub type SunResult<T> = Result<T, SunError>;
