//! Pressure-trend forecast display.

use crate::core::Measurement;
use crate::displays::DisplayElement;
use crate::error::Result;
use crate::notify::Observer;
use std::io::{self, Write};
use tracing::warn;

/// Renders a forecast from the pressure trend between the last two readings.
///
/// Rising pressure forecasts improving weather, equal pressure more of the
/// same, falling pressure cooler and rainy. The previous pressure starts at
/// zero, so the first reading almost always registers as improving — a known
/// quirk of the pattern, kept as-is.
pub struct ForecastDisplay<W = io::Stdout> {
    last_pressure: f32,
    current_pressure: f32,
    out: W,
}

impl ForecastDisplay<io::Stdout> {
    /// Create a display that renders to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for ForecastDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ForecastDisplay<W> {
    /// Create a display that renders to the given sink.
    pub fn with_sink(out: W) -> Self {
        Self {
            last_pressure: 0.0,
            current_pressure: 0.0,
            out,
        }
    }

    fn forecast(&self) -> &'static str {
        if self.current_pressure > self.last_pressure {
            "Forecast: Improving weather on the way!"
        } else if self.current_pressure == self.last_pressure {
            "Forecast: More of the same"
        } else {
            "Forecast: Watch out for cooler, rainy weather"
        }
    }
}

impl<W: Write> Observer for ForecastDisplay<W> {
    fn update(&mut self, measurement: Measurement) {
        self.last_pressure = self.current_pressure;
        self.current_pressure = measurement.pressure;

        if let Err(err) = self.display() {
            warn!(error = %err, "forecast render failed");
        }
    }
}

impl<W: Write> DisplayElement for ForecastDisplay<W> {
    fn display(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.forecast())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displays::test_sink::SharedSink;

    fn reading(pressure: f32) -> Measurement {
        Measurement::new(80.0, 65.0, pressure)
    }

    #[test]
    fn test_rising_pressure_forecasts_improvement() {
        let sink = SharedSink::new();
        let mut display = ForecastDisplay::with_sink(sink.clone());

        display.update(reading(29.2));
        display.update(reading(30.4));

        assert_eq!(
            sink.lines()[1],
            "Forecast: Improving weather on the way!"
        );
    }

    #[test]
    fn test_equal_pressure_forecasts_no_change() {
        let sink = SharedSink::new();
        let mut display = ForecastDisplay::with_sink(sink.clone());

        display.update(reading(29.2));
        display.update(reading(29.2));

        assert_eq!(sink.lines()[1], "Forecast: More of the same");
    }

    #[test]
    fn test_falling_pressure_forecasts_rain() {
        let sink = SharedSink::new();
        let mut display = ForecastDisplay::with_sink(sink.clone());

        display.update(reading(30.4));
        display.update(reading(29.2));

        assert_eq!(
            sink.lines()[1],
            "Forecast: Watch out for cooler, rainy weather"
        );
    }

    #[test]
    fn test_first_reading_compares_against_zero() {
        let sink = SharedSink::new();
        let mut display = ForecastDisplay::with_sink(sink.clone());

        // Previous pressure defaults to zero, so any positive pressure
        // registers as improving on the first update.
        display.update(reading(30.4));

        assert_eq!(
            sink.lines(),
            vec!["Forecast: Improving weather on the way!"]
        );
    }
}
