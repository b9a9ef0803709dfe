//! Error types for record searches.
//!
//! Validation and conflict errors are raised before any request is sent.
//! Archive errors wrap the lower-level zip parsing failures, while
//! filesystem errors pass through untouched.

use thiserror::Error;

/// Main error type for the cesmd library.
#[derive(Debug, Error)]
pub enum Error {
    /// An enumerated option carried a value outside its allowed set.
    #[error("Invalid {field} '{value}': supported values are {allowed}")]
    Validation {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// Bounding box and radius selection were both given for one target.
    #[error("Select {target}s either by bounding box or by radius, not both")]
    Conflict { target: &'static str },

    /// The service answered with something other than 200.
    #[error("Your request returned a status code of {status} with message: \"{reason}\"")]
    Service { status: u16, reason: String },

    /// The response body could not be read as a zip archive.
    #[error("Archive error: {0:#}")]
    Archive(anyhow::Error),

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Error::Validation {
            field,
            value: value.to_string(),
            allowed: allowed.join(","),
        }
    }
}

/// Result type alias for cesmd operations.
pub type Result<T> = std::result::Result<T, Error>;
