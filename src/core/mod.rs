//! Core subject types.

mod builder;
mod measurement;
mod station;

pub use builder::WeatherStationBuilder;
pub use measurement::Measurement;
pub use station::WeatherStation;
