//! The classic weather station demonstration.
//!
//! Registers the three reference displays and pushes a fixed sequence of
//! three measurements; each display renders one line per update.
//!
//! Run with: cargo run --example weather_station

use weathervane::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut station = WeatherStation::new();

    station.register_observer(Box::new(CurrentConditionsDisplay::new()));
    station.register_observer(Box::new(StatisticsDisplay::new()));
    station.register_observer(Box::new(ForecastDisplay::new()));

    station.set_measurements(80.0, 65.0, 30.4);
    station.set_measurements(82.0, 70.0, 29.2);
    station.set_measurements(78.0, 90.0, 29.2);
}
