//! Whole-configuration checks using Validation.
//!
//! Every check runs and every violation is reported, so a broken
//! configuration can be fixed in one pass.

use crate::config::error::{ConfigError, ConfigViolation};
use crate::config::{Baseline, Config};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of [`Config::validate`].
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

impl Config {
    /// Check the configuration, accumulating ALL violations.
    ///
    /// Checks that the initial state, every transition target and a named
    /// baseline are keys of the state table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::{fsm_config, Baseline};
    ///
    /// let config = fsm_config! {
    ///     initial: "a",
    ///     baseline: Baseline::Initial,
    ///     states: {
    ///         "a" => { "go" => "b" },
    ///         "b" => { "back" => "a" },
    ///     }
    /// };
    /// assert!(config.validate().is_success());
    ///
    /// let broken = fsm_config! {
    ///     initial: "missing",
    ///     states: {
    ///         "a" => { "go" => "nowhere" },
    ///     }
    /// };
    /// assert!(broken.validate().is_failure());
    /// ```
    pub fn validate(&self) -> ConfigValidation {
        let mut checks: Vec<ConfigValidation> = Vec::new();

        checks.push(if self.states.contains_key(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitial {
                initial: self.initial.clone(),
            })
        });

        for (state, spec) in &self.states {
            for (event, target) in &spec.transitions {
                if !self.states.contains_key(target) {
                    checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        if let Baseline::State(baseline) = &self.baseline {
            if !self.states.contains_key(baseline) {
                checks.push(Validation::fail(ConfigViolation::UnknownBaseline {
                    baseline: baseline.clone(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand the configuration back, or fail with every violation.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
