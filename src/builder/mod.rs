//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for writing state tables with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
