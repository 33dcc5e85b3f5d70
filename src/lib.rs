//! Waymark: a minimal finite state machine with undo/redo history
//!
//! A machine is declared as a table of named states, each with event-keyed
//! transition rules. The machine tracks its current state, moves on events
//! or direct jumps, and keeps a linear history of visited states that can
//! be walked back and forth with undo and redo.
//!
//! # Core Concepts
//!
//! - **State table**: state names mapped to their [`StateSpec`] rules
//! - **History**: visited states plus a cursor for undo/redo
//! - **Journal**: timestamped log of every state change
//! - **Baseline**: the state `reset` and `clear_history` return to
//!
//! Everything is synchronous and in-memory. Failed operations return an
//! [`Error`] and leave the machine untouched.
//!
//! # Example
//!
//! ```rust
//! use waymark::{fsm_config, Error, StateMachine};
//!
//! let mut machine = StateMachine::new(fsm_config! {
//!     initial: "normal",
//!     states: {
//!         "normal" => { "insert" => "editing", "select" => "visual" },
//!         "editing" => { "escape" => "normal" },
//!         "visual" => { "escape" => "normal" },
//!     }
//! });
//!
//! machine.trigger("insert").unwrap();
//! assert_eq!(machine.current_state(), "editing");
//!
//! let err = machine.trigger("select").unwrap_err();
//! assert!(matches!(err, Error::NoTransition { .. }));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "normal");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "editing");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::StateMachineBuilder;
pub use crate::config::{Baseline, Config, ConfigError, ConfigViolation, DEFAULT_BASELINE};
pub use crate::core::{
    History, Journal, StateSpec, StateTable, StateTransition, TransitionCause, TransitionTable,
};
pub use crate::machine::{Error, Result, StateMachine};
