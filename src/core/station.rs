//! The weather station subject.

use crate::core::{Measurement, WeatherStationBuilder};
use crate::notify::{Observer, ObserverId, ObserverRegistry};

/// The subject: owns the current measurement and the observer registry.
///
/// Updating the measurement with [`set_measurements`](Self::set_measurements)
/// overwrites the stored reading and synchronously notifies every registered
/// observer, in registration order, before returning. The station has no
/// mode — it always overwrites-then-notifies.
///
/// # Examples
///
/// ```rust
/// use weathervane::prelude::*;
///
/// let mut station = WeatherStation::new();
/// station.register_observer(Box::new(CurrentConditionsDisplay::new()));
///
/// station.set_measurements(80.0, 65.0, 30.4);
/// assert_eq!(station.measurement(), Measurement::new(80.0, 65.0, 30.4));
/// ```
#[derive(Default)]
pub struct WeatherStation {
    measurement: Measurement,
    observers: ObserverRegistry,
}

impl WeatherStation {
    /// Create a station with no observers and a default (all-zero) reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluent station construction.
    pub fn builder() -> WeatherStationBuilder {
        WeatherStationBuilder::new()
    }

    pub(crate) fn with_parts(measurement: Measurement, observers: ObserverRegistry) -> Self {
        Self {
            measurement,
            observers,
        }
    }

    /// The current stored reading.
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Register an observer for all subsequent broadcasts.
    ///
    /// The observer never sees the station's current reading retroactively;
    /// it only receives measurements pushed after this call. Registering the
    /// same logical observer twice results in two notifications per update.
    ///
    /// Returns the identity token used for
    /// [`remove_observer`](Self::remove_observer).
    pub fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Remove a previously registered observer.
    ///
    /// Returns the observer, handing its accumulated state back to the
    /// caller. A no-op returning `None` if the token is unknown or was
    /// already removed.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        self.observers.remove(id)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Overwrite the stored reading and broadcast it.
    ///
    /// The fan-out is the entire side effect: every currently registered
    /// observer receives exactly one `update` call with these values, in
    /// registration order, before this method returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weathervane::prelude::*;
    ///
    /// let mut station = WeatherStation::new();
    /// station.set_measurements(82.0, 70.0, 29.2);
    /// assert_eq!(station.measurement().pressure, 29.2);
    /// ```
    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.measurement = Measurement::new(temperature, humidity, pressure);
        self.notify_observers();
    }

    /// Broadcast the current reading to all registered observers.
    ///
    /// Called by [`set_measurements`](Self::set_measurements) after every
    /// overwrite; exposed so a caller can re-deliver the current reading on
    /// demand. The observer set for one broadcast is a consistent snapshot —
    /// the exclusive borrow rules out interleaved registration or removal.
    pub fn notify_observers(&mut self) {
        self.observers.notify_all(self.measurement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        seen: Rc<RefCell<Vec<Measurement>>>,
    }

    impl Observer for Recorder {
        fn update(&mut self, measurement: Measurement) {
            self.seen.borrow_mut().push(measurement);
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<Measurement>>>, Box<Recorder>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer = Box::new(Recorder {
            seen: Rc::clone(&seen),
        });
        (seen, observer)
    }

    #[test]
    fn test_set_measurements_overwrites_wholesale() {
        let mut station = WeatherStation::new();
        station.set_measurements(80.0, 65.0, 30.4);
        station.set_measurements(82.0, 70.0, 29.2);

        assert_eq!(station.measurement(), Measurement::new(82.0, 70.0, 29.2));
    }

    #[test]
    fn test_broadcast_delivers_exact_values() {
        let mut station = WeatherStation::new();
        let (seen, observer) = recorder();
        station.register_observer(observer);

        station.set_measurements(80.0, 65.0, 30.4);
        station.set_measurements(82.0, 70.0, 29.2);

        assert_eq!(
            *seen.borrow(),
            vec![
                Measurement::new(80.0, 65.0, 30.4),
                Measurement::new(82.0, 70.0, 29.2),
            ]
        );
    }

    #[test]
    fn test_no_retroactive_delivery() {
        let mut station = WeatherStation::new();
        station.set_measurements(80.0, 65.0, 30.4);

        let (seen, observer) = recorder();
        station.register_observer(observer);

        // Registration alone must not replay the stored reading.
        assert!(seen.borrow().is_empty());

        station.set_measurements(82.0, 70.0, 29.2);
        assert_eq!(*seen.borrow(), vec![Measurement::new(82.0, 70.0, 29.2)]);
    }

    #[test]
    fn test_notify_observers_rebroadcasts_current_reading() {
        let mut station = WeatherStation::new();
        let (seen, observer) = recorder();
        station.register_observer(observer);

        station.set_measurements(80.0, 65.0, 30.4);
        station.notify_observers();

        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1], Measurement::new(80.0, 65.0, 30.4));
    }

    #[test]
    fn test_removed_observer_is_skipped() {
        let mut station = WeatherStation::new();
        let (seen, observer) = recorder();
        let id = station.register_observer(observer);

        station.set_measurements(80.0, 65.0, 30.4);
        station.remove_observer(id);
        station.set_measurements(82.0, 70.0, 29.2);

        assert_eq!(*seen.borrow(), vec![Measurement::new(80.0, 65.0, 30.4)]);
        assert_eq!(station.observer_count(), 0);
    }

    #[test]
    fn test_remove_unknown_observer_is_noop() {
        let mut station = WeatherStation::new();
        let (_, observer) = recorder();
        let id = station.register_observer(observer);

        station.remove_observer(id);
        assert!(station.remove_observer(id).is_none());
    }
}
