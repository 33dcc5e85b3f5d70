//! Builder for constructing state machines.

use crate::config::{Baseline, Config, ConfigError};
use crate::core::{StateSpec, StateTable};
use crate::machine::{Result, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use waymark::{Baseline, StateMachineBuilder};
///
/// let mut machine = StateMachineBuilder::new()
///     .initial("locked")
///     .transition("locked", "coin", "unlocked")
///     .transition("unlocked", "push", "locked")
///     .baseline(Baseline::Initial)
///     .strict()
///     .build()
///     .unwrap();
///
/// machine.trigger("coin").unwrap();
/// assert_eq!(machine.current_state(), "unlocked");
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    baseline: Option<Baseline>,
    states: StateTable,
    strict: bool,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Set where `reset` and `clear_history` return to.
    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Add a state with its full definition, replacing any earlier one.
    pub fn state(mut self, name: impl Into<String>, spec: StateSpec) -> Self {
        self.states.insert(name.into(), spec);
        self
    }

    /// Add a rule to `from`, declaring `from` if it is not yet known.
    ///
    /// `to` is not declared; add it with [`state`](Self::state) or its own
    /// transitions.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Validate the whole configuration on [`build`](Self::build).
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Produce the configuration without building a machine.
    /// Returns an error if the initial state was never set.
    pub fn config(self) -> std::result::Result<Config, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::Missing)?;
        let config = Config::new(initial, self.states);
        Ok(match self.baseline {
            Some(baseline) => config.with_baseline(baseline),
            None => config,
        })
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing, or if strict mode
    /// finds violations.
    pub fn build(self) -> Result<StateMachine> {
        let strict = self.strict;
        let config = self.config()?;

        if strict {
            StateMachine::strict(config)
        } else {
            Ok(StateMachine::new(config))
        }
    }
}
