//! Current-conditions display.

use crate::core::Measurement;
use crate::displays::DisplayElement;
use crate::error::Result;
use crate::notify::Observer;
use std::io::{self, Write};
use tracing::warn;

/// Renders the latest temperature and humidity verbatim.
///
/// # Examples
///
/// ```rust
/// use weathervane::prelude::*;
///
/// let mut station = WeatherStation::new();
/// station.register_observer(Box::new(CurrentConditionsDisplay::new()));
///
/// // Prints "Current Conditions: 80F degrees and 65% humidity"
/// station.set_measurements(80.0, 65.0, 30.4);
/// ```
pub struct CurrentConditionsDisplay<W = io::Stdout> {
    temperature: f32,
    humidity: f32,
    out: W,
}

impl CurrentConditionsDisplay<io::Stdout> {
    /// Create a display that renders to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for CurrentConditionsDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CurrentConditionsDisplay<W> {
    /// Create a display that renders to the given sink.
    pub fn with_sink(out: W) -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            out,
        }
    }
}

impl<W: Write> Observer for CurrentConditionsDisplay<W> {
    fn update(&mut self, measurement: Measurement) {
        self.temperature = measurement.temperature;
        self.humidity = measurement.humidity;

        if let Err(err) = self.display() {
            warn!(error = %err, "current-conditions render failed");
        }
    }
}

impl<W: Write> DisplayElement for CurrentConditionsDisplay<W> {
    fn display(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Current Conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )?;
        Ok(())
    }
}
