//! Observer registration and ordered broadcast.
//!
//! Provides the [`Observer`] capability and the identity-token registry the
//! subject uses to fan measurements out to its subscribers.

mod observer;
mod registry;

pub use observer::Observer;
pub use registry::{ObserverId, ObserverRegistry};
