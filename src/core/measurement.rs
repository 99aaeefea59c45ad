//! The measurement tuple broadcast to observers.

use serde::{Deserialize, Serialize};

/// A single weather reading.
///
/// The station's copy is overwritten wholesale on every update — there are no
/// partial updates — and each observer receives its own copy, immutable from
/// the observer's point of view.
///
/// # Examples
///
/// ```rust
/// use weathervane::core::Measurement;
///
/// let reading = Measurement::new(80.0, 65.0, 30.4);
/// assert_eq!(reading.temperature, 80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Temperature in degrees Fahrenheit.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Barometric pressure in inches of mercury.
    pub pressure: f32,
}

impl Measurement {
    /// Create a measurement from its three components.
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}
