//! Errors returned by state machine operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while constructing or driving a state machine.
///
/// A failed operation never changes the machine: the current state, the
/// history and the cursor are exactly as they were before the call.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },
}

/// Result alias for state machine operations.
pub type Result<T> = std::result::Result<T, Error>;
