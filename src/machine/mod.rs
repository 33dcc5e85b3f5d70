//! The state machine: transition dispatch and history navigation.
//!
//! Every mutating operation validates first and then updates the current
//! state, history and cursor together, so a failed call leaves the machine
//! exactly as it was.

pub mod error;

pub use error::{Error, Result};

use crate::config::{Baseline, Config, ConfigError};
use crate::core::{
    History, Journal, StateSpec, StateTable, StateTransition, TransitionCause, TransitionTable,
};
use chrono::Utc;
use tracing::{debug, warn};

/// Finite state machine with event-driven transitions and undo/redo history.
///
/// # Example
///
/// ```rust
/// use waymark::{fsm_config, StateMachine};
///
/// let mut machine = StateMachine::new(fsm_config! {
///     initial: "a",
///     states: {
///         "a" => { "go" => "b" },
///         "b" => { "back" => "a" },
///     }
/// });
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.current_state(), "b");
///
/// machine.trigger("back").unwrap();
/// assert_eq!(machine.history(), ["a", "b"]);
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "b");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    current: String,
    initial: String,
    baseline: Baseline,
    states: StateTable,
    history: History,
    journal: Journal,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The initial state is not checked against the state table; use
    /// [`strict`](Self::strict) for that.
    pub fn new(config: Config) -> Self {
        let Config {
            initial,
            baseline,
            states,
        } = config;

        debug!(
            initial = %initial,
            states = states.len(),
            "Created state machine"
        );

        Self {
            current: initial.clone(),
            history: History::new(initial.clone()),
            initial,
            baseline,
            states,
            journal: Journal::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] when `config` is `None`.
    pub fn from_config(config: Option<Config>) -> Result<Self> {
        let config = config.ok_or(ConfigError::Missing)?;
        Ok(Self::new(config))
    }

    /// Create a machine after validating the whole configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] listing every violation found by
    /// [`Config::validate`].
    pub fn strict(config: Config) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self::new(config))
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] for a `null` document and
    /// [`ConfigError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Config::from_json(json)?))
    }

    /// Get the current state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Get the configured initial state.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Name of the state `reset` and `clear_history` return to.
    pub fn baseline_state(&self) -> &str {
        self.baseline.resolve(&self.initial)
    }

    /// Check whether `state` is a key of the state table.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if it is in the table.
    pub fn state_spec(&self, state: &str) -> Option<&StateSpec> {
        self.states.get(state)
    }

    /// Transition rules of `state`, if it is in the table.
    pub fn transitions_from(&self, state: &str) -> Option<&TransitionTable> {
        self.states.get(state).map(|spec| &spec.transitions)
    }

    /// Recorded history entries, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Current undo/redo position within the history.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Timestamped log of every successful state change.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Jump directly to `state`.
    ///
    /// The state is always appended to the history, even if it is already
    /// recorded, and the cursor advances.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownState`] when `state` is not in the table.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if !self.has_state(state) {
            warn!(
                from = %self.current,
                state = %state,
                "Rejected jump to unknown state"
            );
            return Err(Error::UnknownState {
                state: state.to_string(),
            });
        }

        self.history.push(state);
        self.enter(state.to_string(), TransitionCause::Jump);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// The target is appended to the history only if it is not already
    /// recorded anywhere in it; the cursor advances either way.
    ///
    /// # Errors
    ///
    /// [`Error::NoTransition`] when the current state has no rule for
    /// `event`, including when the current state is not in the table.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let Some(target) = self
            .states
            .get(&self.current)
            .and_then(|spec| spec.target(event))
            .map(str::to_owned)
        else {
            warn!(
                state = %self.current,
                event = %event,
                "Rejected event with no transition"
            );
            return Err(Error::NoTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        self.history.push_unique(&target);
        self.enter(target, TransitionCause::Event(event.to_string()));
        Ok(())
    }

    /// Move to the baseline state without touching history or cursor.
    pub fn reset(&mut self) {
        let baseline = self.baseline_state().to_string();
        self.enter(baseline, TransitionCause::Reset);
    }

    /// List state names in table order.
    ///
    /// With `Some(event)`, only the states that have a rule for `event`.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, spec)| event.is_none_or(|event| spec.handles(event)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Check whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Step back through the history.
    ///
    /// Returns `false` without changing anything when the cursor is at the
    /// start.
    ///
    /// Repeated triggers can push the cursor past the last entry. Undo then
    /// pulls it back to the last entry in one step; if the current state
    /// already equals that entry, undo returns `true` with the state
    /// unchanged, and no journal record is written.
    pub fn undo(&mut self) -> bool {
        let Some(target) = self.history.step_back().map(str::to_owned) else {
            debug!(state = %self.current, "Nothing to undo");
            return false;
        };
        if target == self.current {
            debug!(
                state = %self.current,
                cursor = self.history.cursor(),
                "Undo rewound cursor without leaving state"
            );
            return true;
        }
        self.enter(target, TransitionCause::Undo);
        true
    }

    /// Check whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward(&self.current)
    }

    /// Step forward through the history.
    ///
    /// Returns `false` without changing anything when there is no later
    /// entry, or when the current state already equals the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(target) = self
            .history
            .step_forward(&self.current)
            .map(str::to_owned)
        else {
            debug!(
                state = %self.current,
                cursor = self.history.cursor(),
                "Nothing to redo"
            );
            return false;
        };
        self.enter(target, TransitionCause::Redo);
        true
    }

    /// Wipe the history down to the baseline state and rewind the cursor.
    ///
    /// The current state is left as is. The journal is cleared too.
    pub fn clear_history(&mut self) {
        let baseline = self.baseline_state().to_string();
        debug!(
            dropped = self.history.len(),
            baseline = %baseline,
            "Cleared history"
        );
        self.history.reset(baseline);
        self.journal.clear();
    }

    fn enter(&mut self, to: String, cause: TransitionCause) {
        let from = std::mem::replace(&mut self.current, to.clone());
        debug!(
            from = %from,
            to = %to,
            cause = ?cause,
            cursor = self.history.cursor(),
            "State machine transitioned"
        );
        self.journal.record(StateTransition {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        });
    }
}
