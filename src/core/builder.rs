//! Builder for constructing WeatherStation instances.

use crate::core::{Measurement, WeatherStation};
use crate::notify::{Observer, ObserverRegistry};

/// Builder for constructing a [`WeatherStation`].
///
/// Provides a fluent interface for seeding the station with observers and an
/// initial reading. Observers are registered in the order they are added;
/// their identity tokens are not surfaced here, so callers that need to
/// remove an observer later should register it on the built station via
/// [`WeatherStation::register_observer`] instead.
///
/// # Examples
///
/// ```rust
/// use weathervane::prelude::*;
///
/// let mut station = WeatherStation::builder()
///     .with_observer(Box::new(CurrentConditionsDisplay::new()))
///     .with_observer(Box::new(ForecastDisplay::new()))
///     .build();
///
/// station.set_measurements(80.0, 65.0, 30.4);
/// ```
#[derive(Default)]
pub struct WeatherStationBuilder {
    observers: Vec<Box<dyn Observer>>,
    initial: Option<Measurement>,
}

impl WeatherStationBuilder {
    /// Create a new builder with no observers and a default reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    ///
    /// Observers are registered in the order they are added and will be
    /// notified in that order on every broadcast.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Seed the station with an initial reading.
    ///
    /// The seed is stored without broadcasting: observers added here only see
    /// measurements pushed after the station is built, never the seed itself.
    pub fn with_initial(mut self, measurement: Measurement) -> Self {
        self.initial = Some(measurement);
        self
    }

    /// Build the station, registering all accumulated observers.
    pub fn build(self) -> WeatherStation {
        let mut registry = ObserverRegistry::new();
        for observer in self.observers {
            registry.register(observer);
        }

        WeatherStation::with_parts(self.initial.unwrap_or_default(), registry)
    }
}
