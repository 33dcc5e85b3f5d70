//! Editor Modes
//!
//! This example loads a modal editor's state table from JSON and shows the
//! machine's structured log output.
//!
//! Key concepts:
//! - JSON configuration
//! - Error values for unknown states and missing transitions
//! - `tracing` events from every move
//!
//! Run with: RUST_LOG=waymark=debug cargo run --example editor_modes

use tracing_subscriber::EnvFilter;
use waymark::{Error, StateMachine};

const MODES: &str = r#"{
    "initial": "normal",
    "states": {
        "normal":  { "transitions": { "i": "insert", "v": "visual", ":": "command" } },
        "insert":  { "transitions": { "esc": "normal" } },
        "visual":  { "transitions": { "esc": "normal", "i": "insert" } },
        "command": { "transitions": { "esc": "normal", "enter": "normal" } }
    }
}"#;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    println!("=== Editor Modes ===\n");

    let mut editor = StateMachine::from_json(MODES)?;
    println!("Modes: {:?}", editor.states(None));
    println!("Modes that accept 'esc': {:?}", editor.states(Some("esc")));

    for key in ["v", "i", "esc", ":", "enter"] {
        editor.trigger(key)?;
        println!("  {key:>5} -> {}", editor.current_state());
    }

    if let Err(err) = editor.trigger("esc") {
        println!("\nRejected: {err}");
    }
    if let Err(err) = editor.change_state("replace") {
        println!("Rejected: {err}");
    }

    editor.change_state("visual")?;
    println!("\nJumped to {}", editor.current_state());
    println!("History: {:?}", editor.history());

    println!("\nUndo: {}", editor.undo());
    println!("Now in {}", editor.current_state());

    editor.clear_history();
    println!("\nCleared history: {:?}", editor.history());

    println!("\n=== Example Complete ===");
    Ok(())
}
