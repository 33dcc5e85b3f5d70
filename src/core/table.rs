//! State table and transition rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event name to target state name, scoped to one state.
pub type TransitionTable = BTreeMap<String, String>;

/// State name to that state's definition.
///
/// Keys are kept in sorted order, which is the order
/// [`StateMachine::states`](crate::StateMachine::states) reports them in.
pub type StateTable = BTreeMap<String, StateSpec>;

/// Definition of a single state: the events it reacts to and where they lead.
///
/// # Example
///
/// ```rust
/// use waymark::StateSpec;
///
/// let idle = StateSpec::new().on("start", "running").on("stop", "stopped");
///
/// assert_eq!(idle.target("start"), Some("running"));
/// assert!(idle.handles("stop"));
/// assert!(!idle.handles("pause"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSpec {
    /// Transition rules fired from this state
    #[serde(default)]
    pub transitions: TransitionTable,
}

impl StateSpec {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule: when `event` fires in this state, move to `target`.
    ///
    /// A later rule for the same event replaces the earlier one.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state has a rule for it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state has a rule for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}
