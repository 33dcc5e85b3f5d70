//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic event-driven transitions
//! - History de-duplication on repeated visits
//! - Walking the history with undo/redo
//!
//! Run with: cargo run --example traffic_light

use waymark::{Baseline, StateMachineBuilder};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = StateMachineBuilder::new()
        .initial("red")
        .transition("red", "next", "green")
        .transition("green", "next", "yellow")
        .transition("yellow", "next", "red")
        .baseline(Baseline::Initial)
        .strict()
        .build()
        .expect("traffic light table is valid");

    println!("Initial state: {}", light.current_state());

    println!("\nCycling twice:");
    for _ in 0..6 {
        light.trigger("next").expect("every light has a next rule");
        println!("  -> {}", light.current_state());
    }

    // Only the first visit to each colour is recorded
    println!("\nHistory: {:?}", light.history());
    println!("Cursor:  {}", light.cursor());

    println!("\nWalking back:");
    while light.undo() {
        println!("  <- {}", light.current_state());
    }

    println!("\nWalking forward:");
    while light.redo() {
        println!("  -> {}", light.current_state());
    }

    light.reset();
    println!("\nAfter reset: {}", light.current_state());
    println!("Journal recorded {} moves", light.journal().len());

    println!("\n=== Example Complete ===");
}
