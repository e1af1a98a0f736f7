//! Error types for the privacy filtering library.
//!
//! Configuration problems surface once, when a catalog or policy is loaded.
//! Scan failures are local to a single content unit and never abort a batch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type for all filtering operations.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A custom pattern, keyword list or policy definition is invalid.
    #[error("Configuration error in '{subject}': {reason}")]
    Configuration { subject: String, reason: String },

    /// Matching failed for a single content unit.
    #[error("Scan failed for unit '{unit_id}': {reason}")]
    Scan { unit_id: String, reason: String },

    /// The persistence collaborator rejected or could not find a unit.
    #[error("Store error for unit '{unit_id}': {reason}")]
    Store { unit_id: String, reason: String },

    /// Error occurred while reading a configuration or input file
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl FilterError {
    /// Shorthand for a configuration error.
    pub fn configuration(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a per-unit scan error.
    pub fn scan(unit_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Scan {
            unit_id: unit_id.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors that should flag a unit for manual review
    /// instead of failing the surrounding operation.
    pub fn is_unit_local(&self) -> bool {
        matches!(self, Self::Scan { .. })
    }
}

impl From<regex::Error> for FilterError {
    fn from(err: regex::Error) -> Self {
        Self::Configuration {
            subject: "<pattern>".to_string(),
            reason: err.to_string(),
        }
    }
}
