//! Example demonstrating token-based unsubscription.
//!
//! This example shows how to:
//! - Register observers and keep their identity tokens
//! - Remove an observer mid-sequence
//! - Verify later broadcasts skip the removed observer
//!
//! Run with: cargo run --example unsubscribe

use weathervane::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Token-Based Unsubscription Example ===\n");

    let mut station = WeatherStation::new();

    station.register_observer(Box::new(CurrentConditionsDisplay::new()));
    let statistics = station.register_observer(Box::new(StatisticsDisplay::new()));
    station.register_observer(Box::new(ForecastDisplay::new()));

    println!("Registered {} observers\n", station.observer_count());

    println!("--- Update 1: 80F, 65%, 30.4inHg ---");
    station.set_measurements(80.0, 65.0, 30.4);

    println!("\n--- Removing the statistics display ---");
    let removed = station.remove_observer(statistics);
    println!(
        "Removed: {} ({} observers remain)",
        removed.is_some(),
        station.observer_count()
    );

    println!("\n--- Update 2: 82F, 70%, 29.2inHg ---");
    station.set_measurements(82.0, 70.0, 29.2);

    // Removing the same token again is a no-op, not an error.
    assert!(station.remove_observer(statistics).is_none());

    println!("\nExample complete!");
}
