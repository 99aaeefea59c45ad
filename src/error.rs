//! Error types for weathervane.

/// Result type alias for weathervane operations.
pub type Result<T> = std::result::Result<T, StationError>;

/// Errors that can occur when working with a weather station.
///
/// Registration, removal, and broadcast are total operations and never fail.
/// The only fallible surface is rendering: a display's output sink can reject
/// a write.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// A display's output sink rejected a rendered line.
    #[error("Failed to write display output: {0}")]
    DisplayWrite(#[from] std::io::Error),
}
