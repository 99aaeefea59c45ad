//! Running-average statistics display.

use crate::core::Measurement;
use crate::displays::DisplayElement;
use crate::error::Result;
use crate::notify::Observer;
use std::io::{self, Write};
use tracing::warn;

/// Accumulates a running temperature sum and renders the arithmetic mean.
///
/// The accumulator lives and dies with the display; it is never reset
/// externally.
pub struct StatisticsDisplay<W = io::Stdout> {
    temperature_sum: f32,
    reading_count: u32,
    out: W,
}

impl StatisticsDisplay<io::Stdout> {
    /// Create a display that renders to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for StatisticsDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StatisticsDisplay<W> {
    /// Create a display that renders to the given sink.
    pub fn with_sink(out: W) -> Self {
        Self {
            temperature_sum: 0.0,
            reading_count: 0,
            out,
        }
    }

    /// The running mean temperature, or 0 before the first reading.
    ///
    /// The zero-reading guard keeps [`display`](DisplayElement::display)
    /// total instead of dividing by zero.
    pub fn average(&self) -> f32 {
        if self.reading_count == 0 {
            return 0.0;
        }
        self.temperature_sum / self.reading_count as f32
    }
}

impl<W: Write> Observer for StatisticsDisplay<W> {
    fn update(&mut self, measurement: Measurement) {
        self.temperature_sum += measurement.temperature;
        self.reading_count += 1;

        if let Err(err) = self.display() {
            warn!(error = %err, "statistics render failed");
        }
    }
}

impl<W: Write> DisplayElement for StatisticsDisplay<W> {
    fn display(&mut self) -> Result<()> {
        let average = self.average();
        writeln!(self.out, "Average Temperature: {}F", average)?;
        Ok(())
    }
}
