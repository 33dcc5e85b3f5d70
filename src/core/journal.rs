//! Timestamped journal of state changes.
//!
//! Where [`History`](super::History) is the undo/redo timeline, the journal
//! records every successful move in the order it happened, including undo,
//! redo and reset moves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "event", rename_all = "snake_case")]
pub enum TransitionCause {
    /// Direct jump via `change_state`
    Jump,
    /// Event-driven move via `trigger`
    Event(String),
    Undo,
    Redo,
    /// Return to the baseline state via `reset`
    Reset,
}

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use waymark::{StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "idle".to_string(),
///     to: "running".to_string(),
///     cause: TransitionCause::Event("start".to_string()),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    pub cause: TransitionCause,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use waymark::{Journal, StateTransition, TransitionCause};
/// use chrono::Utc;
///
/// let mut journal = Journal::new();
/// journal.record(StateTransition {
///     from: "a".to_string(),
///     to: "b".to_string(),
///     cause: TransitionCause::Jump,
///     timestamp: Utc::now(),
/// });
/// journal.record(StateTransition {
///     from: "b".to_string(),
///     to: "a".to_string(),
///     cause: TransitionCause::Undo,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.get_path(), ["a", "b", "a"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    transitions: Vec<StateTransition>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition record.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Path of states walked: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str, cause: TransitionCause) -> StateTransition {
        StateTransition {
            from: from.to_string(),
            to: to.to_string(),
            cause,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_journal_is_empty() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert!(journal.get_path().is_empty());
        assert!(journal.duration().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut journal = Journal::new();
        journal.record(transition("a", "b", TransitionCause::Jump));
        journal.record(transition(
            "b",
            "c",
            TransitionCause::Event("go".to_string()),
        ));

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.transitions()[1].to, "c");
        assert_eq!(journal.get_path(), ["a", "b", "c"]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut journal = Journal::new();
        let start = Utc::now();

        journal.record(StateTransition {
            from: "a".to_string(),
            to: "b".to_string(),
            cause: TransitionCause::Jump,
            timestamp: start,
        });
        journal.record(StateTransition {
            from: "b".to_string(),
            to: "c".to_string(),
            cause: TransitionCause::Jump,
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(journal.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut journal = Journal::new();
        journal.record(transition("a", "b", TransitionCause::Reset));

        assert_eq!(journal.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn clear_empties_journal() {
        let mut journal = Journal::new();
        journal.record(transition("a", "b", TransitionCause::Jump));
        journal.clear();

        assert!(journal.is_empty());
    }

    #[test]
    fn cause_serializes_with_event_name() {
        let json = serde_json::to_value(TransitionCause::Event("go".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "event", "event": "go"}));

        let json = serde_json::to_value(TransitionCause::Undo).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "undo"}));
    }

    #[test]
    fn journal_serializes_correctly() {
        let mut journal = Journal::new();
        journal.record(transition("a", "b", TransitionCause::Redo));

        let json = serde_json::to_string(&journal).unwrap();
        let deserialized: Journal = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions(), journal.transitions());
    }
}
