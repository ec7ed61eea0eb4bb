//! Closures and Scope
//!
//! This demo walks through the counter side of the library.
//!
//! Key concepts:
//! - Counters keep their count private; only increment/reset touch it
//! - Buttons built in a loop capture their own index by value
//! - Shared vs independent tallies
//! - Deferred callbacks observe what they captured when scheduled
//!
//! Run with: cargo run --example closures

use kata::builder::{CounterBank, Tally};
use kata::core::create_counter;
use kata::deferred::Timeline;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kata=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    println!("=== Closures and Scope ===\n");

    println!("--- Counter with reset ---");
    let mut counter0 = create_counter(0);
    let mut counter1 = create_counter(0);
    println!("Counter 0: {}", counter0.increment());
    println!("Counter 0: {}", counter0.increment());
    println!("Counter 1: {}", counter1.increment());
    println!("Counter 0 reset: {}", counter0.reset());
    println!("Counter 0: {}", counter0.increment());

    println!("\n--- Buttons sharing one tally ---");
    let mut buttons = CounterBank::builder().buttons(3).build()?;
    for button in &mut buttons {
        let click = button.click();
        println!("Button {} clicked, {}", click.label, click.count);
    }

    println!("\n--- Buttons with independent tallies ---");
    let mut buttons = CounterBank::builder()
        .buttons(3)
        .tally(Tally::Independent)
        .build()?;
    for index in [0, 0, 1, 0] {
        let click = buttons[index].click();
        println!("Button {} clicked, {}", click.label, click.count);
    }

    println!("\n--- Callbacks scheduled in a loop ---");
    let mut timeline = Timeline::new();
    for j in 0..3 {
        timeline.schedule(Duration::from_millis(1000), move || j);
    }
    for j in timeline.run() {
        println!("let j: {j}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
