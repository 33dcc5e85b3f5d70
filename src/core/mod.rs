//! Core data model for the state machine.
//!
//! This module contains the plain data the machine is built from:
//! - The state table and per-state transition rules
//! - The undo/redo history with its cursor
//! - The timestamped journal of state changes
//!
//! Nothing in here dispatches events; that is the job of
//! [`StateMachine`](crate::StateMachine).

mod history;
mod journal;
mod table;

pub use history::History;
pub use journal::{Journal, StateTransition, TransitionCause};
pub use table::{StateSpec, StateTable, TransitionTable};
