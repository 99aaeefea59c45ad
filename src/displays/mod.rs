//! Reference display observers.
//!
//! Each display implements [`Observer`](crate::notify::Observer) plus the
//! [`DisplayElement`] rendering capability, writing one human-readable line
//! per received measurement to an owned output sink (stdout by default, any
//! [`std::io::Write`] in tests).

mod current;
mod forecast;
mod statistics;

pub use current::CurrentConditionsDisplay;
pub use forecast::ForecastDisplay;
pub use statistics::StatisticsDisplay;

use crate::error::Result;

/// Trait for rendering a display's current state.
///
/// Displays call this themselves on every update; it is exposed so a caller
/// can re-render on demand without pushing a new measurement.
///
/// # Errors
///
/// Returns [`StationError::DisplayWrite`](crate::error::StationError) if the
/// output sink rejects the rendered line.
pub trait DisplayElement {
    /// Render the display's current state to its output sink.
    fn display(&mut self) -> Result<()>;
}
