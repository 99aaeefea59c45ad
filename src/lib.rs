//! # weathervane
//!
//! Subject/observer weather telemetry with ordered fan-out and token-based
//! unsubscription.
//!
//! ## Overview
//!
//! `weathervane` is a small broadcasting library built around two roles:
//! - A [`WeatherStation`](core::WeatherStation) subject that owns the current
//!   measurement and an ordered observer registry
//! - An [`Observer`](notify::Observer) capability implemented by anything that
//!   wants to react to new measurements
//!
//! Every call to `set_measurements` overwrites the stored reading wholesale
//! and synchronously notifies all registered observers in registration order
//! before returning. Registration hands back an
//! [`ObserverId`](notify::ObserverId) token; removal by token is exact and a
//! no-op when the token is unknown.
//!
//! ## Quick Start
//!
//! ```rust
//! use weathervane::prelude::*;
//!
//! let mut station = WeatherStation::new();
//!
//! let id = station.register_observer(Box::new(CurrentConditionsDisplay::new()));
//! station.register_observer(Box::new(StatisticsDisplay::new()));
//! station.register_observer(Box::new(ForecastDisplay::new()));
//!
//! // Overwrites the stored reading, then fans out to every observer in
//! // registration order.
//! station.set_measurements(80.0, 65.0, 30.4);
//!
//! // Unsubscribe one display; the others keep receiving updates.
//! station.remove_observer(id);
//! station.set_measurements(82.0, 70.0, 29.2);
//! ```
//!
//! ## Guarantees
//!
//! - **Ordered fan-out**: observers are notified in registration order
//! - **Synchronous delivery**: the broadcast completes before
//!   `set_measurements` returns
//! - **Consistent snapshot**: registration and removal cannot interleave with
//!   an in-progress broadcast
//! - **No replay**: an observer only sees measurements pushed after it
//!   registered
//!
//! The three reference displays (current conditions, statistics, forecast)
//! live in [`displays`] and render one line per update to an owned output
//! sink.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod displays;
pub mod error;
pub mod notify;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{Measurement, WeatherStation, WeatherStationBuilder};
    pub use crate::displays::{
        CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay,
    };
    pub use crate::error::{Result, StationError};
    pub use crate::notify::{Observer, ObserverId};
}
