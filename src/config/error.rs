//! Configuration errors.

use thiserror::Error;

/// Errors that can occur while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied
    #[error("No configuration supplied")]
    Missing,

    #[error("Configuration JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict validation found problems; every violation is listed
    #[error("Configuration has {} violation(s)", .0.len())]
    Invalid(Vec<ConfigViolation>),
}

/// A single problem found by [`Config::validate`](crate::Config::validate)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not in the state table")]
    UnknownInitial { initial: String },

    #[error("Event '{event}' in state '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Baseline state '{baseline}' is not in the state table")]
    UnknownBaseline { baseline: String },
}
