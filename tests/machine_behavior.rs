//! End-to-end behavior of the state machine through its public API.

use waymark::{
    fsm_config, Baseline, Config, ConfigError, Error, StateMachine, StateMachineBuilder,
    StateSpec, StateTable,
};

fn two_idle_states() -> Config {
    let mut states = StateTable::new();
    states.insert("a".to_string(), StateSpec::new());
    states.insert("b".to_string(), StateSpec::new());
    Config::new("a", states)
}

fn ping_pong() -> StateMachine {
    StateMachine::new(fsm_config! {
        initial: "a",
        states: {
            "a" => { "go" => "b" },
            "b" => { "back" => "a" },
        }
    })
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    state: String,
    history_len: usize,
    cursor: usize,
}

fn snapshot(machine: &StateMachine) -> Snapshot {
    Snapshot {
        state: machine.current_state().to_string(),
        history_len: machine.history().len(),
        cursor: machine.cursor(),
    }
}

#[test]
fn construction_requires_configuration() {
    let result = StateMachine::from_config(None);
    assert!(matches!(result, Err(Error::Config(ConfigError::Missing))));

    let machine = StateMachine::from_config(Some(two_idle_states())).unwrap();
    assert_eq!(machine.current_state(), "a");
}

#[test]
fn construction_from_json_document() {
    let machine = StateMachine::from_json(
        r#"{"initial": "a", "states": {"a": {"transitions": {}}, "b": {"transitions": {}}}}"#,
    )
    .unwrap();
    assert_eq!(machine.current_state(), "a");

    let err = StateMachine::from_json("null").unwrap_err();
    assert_eq!(err.to_string(), "No configuration supplied");
}

#[test]
fn change_state_to_unknown_name_is_rejected() {
    let mut machine = StateMachine::new(two_idle_states());

    let err = machine.change_state("nonexistent").unwrap_err();

    assert!(matches!(err, Error::UnknownState { ref state } if state == "nonexistent"));
    assert_eq!(err.to_string(), "Unknown state 'nonexistent'");
    assert_eq!(machine.current_state(), "a");
}

#[test]
fn change_state_records_even_known_states() {
    let mut machine = StateMachine::new(two_idle_states());

    machine.change_state("b").unwrap();
    assert_eq!(machine.current_state(), "b");
    assert_eq!(machine.history(), ["a", "b"]);

    machine.change_state("b").unwrap();
    assert_eq!(machine.history(), ["a", "b", "b"]);
}

#[test]
fn trigger_does_not_duplicate_history() {
    let mut machine = ping_pong();

    machine.trigger("go").unwrap();
    assert_eq!(machine.current_state(), "b");
    assert_eq!(machine.history(), ["a", "b"]);

    machine.trigger("back").unwrap();
    assert_eq!(machine.current_state(), "a");
    assert_eq!(machine.history(), ["a", "b"]);
}

#[test]
fn undo_at_start_reports_nothing_to_undo() {
    let mut machine = ping_pong();
    assert!(!machine.undo());
    assert_eq!(machine.current_state(), "a");
}

#[test]
fn undo_then_redo_round_trip() {
    let mut machine = StateMachine::new(fsm_config! {
        initial: "a",
        states: {
            "a" => { "next" => "b" },
            "b" => { "next" => "c" },
            "c" => {},
        }
    });
    machine.trigger("next").unwrap();
    machine.trigger("next").unwrap();
    machine.undo();
    assert_eq!(machine.current_state(), "b");

    let before = machine.current_state().to_string();
    assert!(machine.undo());
    assert!(machine.redo());
    assert_eq!(machine.current_state(), before);
}

#[test]
fn redo_refused_at_newest_entry() {
    let mut machine = ping_pong();
    machine.trigger("go").unwrap();
    assert_eq!(machine.current_state(), "b");

    // "b" is the newest recorded entry
    assert!(!machine.redo());
    assert_eq!(machine.current_state(), "b");
}

#[test]
fn get_states_filters_by_event() {
    let machine = StateMachine::new(fsm_config! {
        initial: "a",
        states: {
            "a" => { "x" => "b" },
            "b" => {},
        }
    });

    assert_eq!(machine.states(Some("x")), ["a"]);
    assert_eq!(machine.states(None), ["a", "b"]);
    assert!(machine.states(Some("nope")).is_empty());
}

#[test]
fn reset_targets_literal_normal() {
    let mut machine = ping_pong();
    machine.trigger("go").unwrap();

    machine.reset();

    assert_eq!(machine.current_state(), "normal");
    assert_ne!(machine.current_state(), machine.initial_state());
}

#[test]
fn clear_history_targets_literal_normal() {
    let mut machine = ping_pong();
    machine.trigger("go").unwrap();

    machine.clear_history();

    assert_eq!(machine.history(), ["normal"]);
    assert_eq!(machine.cursor(), 0);
}

#[test]
fn initial_baseline_returns_to_configured_start() {
    let mut machine = StateMachineBuilder::new()
        .initial("a")
        .transition("a", "go", "b")
        .transition("b", "back", "a")
        .baseline(Baseline::Initial)
        .build()
        .unwrap();
    machine.trigger("go").unwrap();

    machine.reset();
    assert_eq!(machine.current_state(), "a");

    machine.clear_history();
    assert_eq!(machine.history(), ["a"]);
}

#[test]
fn failed_operations_leave_machine_untouched() {
    let mut machine = ping_pong();
    machine.trigger("go").unwrap();
    machine.change_state("b").unwrap();
    let before = snapshot(&machine);

    assert!(machine.change_state("nowhere").is_err());
    assert_eq!(snapshot(&machine), before);

    assert!(machine.trigger("go").is_err());
    assert_eq!(snapshot(&machine), before);
}

#[test]
fn trigger_after_reset_to_undeclared_baseline_fails() {
    let mut machine = ping_pong();
    machine.reset();

    let err = machine.trigger("go").unwrap_err();
    assert!(matches!(err, Error::NoTransition { ref state, .. } if state == "normal"));
    assert_eq!(
        err.to_string(),
        "No transition for event 'go' from state 'normal'"
    );
}
