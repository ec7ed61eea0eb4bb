//! Deferred Timers
//!
//! Real timers on a tokio runtime. Each task captures its loop index by
//! value, so every timer reports its own iteration. Timers scheduled with
//! increasing delays fire in the order they were scheduled.
//!
//! Run with: cargo run --example deferred_timers

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();

    println!("=== Deferred Timers ===\n");

    let fired = Arc::new(Mutex::new(Vec::new()));
    let mut handles = Vec::new();

    for i in 0..3u64 {
        let fired = Arc::clone(&fired);
        handles.push(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100 * (i + 1))).await;
            info!(index = i, "timer fired");
            if let Ok(mut order) = fired.lock() {
                order.push(i);
            }
        }));
    }

    for handle in handles {
        if let Err(e) = handle.await {
            eprintln!("timer task failed: {e}");
        }
    }

    if let Ok(order) = fired.lock() {
        println!("Fired in order: {:?}", *order);
    }

    println!("\n=== Demo Complete ===");
}
