//! Declarative machine configuration.
//!
//! A [`Config`] names the initial state and the state table. It can be
//! written in code, built with [`fsm_config!`](crate::fsm_config) or the
//! [`StateMachineBuilder`](crate::StateMachineBuilder), or parsed from JSON:
//!
//! ```rust
//! use waymark::Config;
//!
//! let config = Config::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.initial, "idle");
//! assert_eq!(config.states.len(), 2);
//! ```

pub mod error;
mod validation;

pub use error::{ConfigError, ConfigViolation};
pub use validation::ConfigValidation;

use crate::core::StateTable;
use serde::{Deserialize, Serialize};

/// State that `reset` and `clear_history` return to unless configured otherwise.
pub const DEFAULT_BASELINE: &str = "normal";

/// The well-known state the machine returns to on `reset` and `clear_history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// Return to the configured initial state
    Initial,
    /// Return to a fixed, named state
    State(String),
}

impl Default for Baseline {
    fn default() -> Self {
        Self::State(DEFAULT_BASELINE.to_string())
    }
}

impl Baseline {
    /// Name of the baseline state for a machine configured with `initial`.
    pub fn resolve<'a>(&'a self, initial: &'a str) -> &'a str {
        match self {
            Self::Initial => initial,
            Self::State(name) => name,
        }
    }
}

/// Configuration supplied once at machine construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in
    pub initial: String,

    #[serde(default)]
    pub baseline: Baseline,

    /// All known states and their transition rules
    pub states: StateTable,
}

impl Config {
    /// Create a configuration with the default baseline.
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            baseline: Baseline::default(),
            states,
        }
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// A `null` document is treated as an absent configuration and yields
    /// [`ConfigError::Missing`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Config> = serde_json::from_str(json)?;
        parsed.ok_or(ConfigError::Missing)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Name of the state `reset` and `clear_history` return to.
    pub fn baseline_state(&self) -> &str {
        self.baseline.resolve(&self.initial)
    }
}
