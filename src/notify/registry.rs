//! Identity-token registry for ordered observer broadcast.

use crate::core::Measurement;
use crate::notify::Observer;
use tracing::{debug, trace};

/// Identity token returned by [`ObserverRegistry::register`].
///
/// Tokens are allocated monotonically per registry and never reused, so a
/// token identifies exactly one registration even when two observers have
/// identical behavior. Removal compares tokens, not observer content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry for managing measurement observers.
///
/// Observers are kept in registration order and notified in that order on
/// every broadcast. Registering the same logical observer twice is permitted
/// and results in two notifications per broadcast; each registration gets its
/// own [`ObserverId`].
///
/// # Examples
///
/// ```rust
/// use weathervane::core::Measurement;
/// use weathervane::notify::{Observer, ObserverRegistry};
///
/// struct ReadingCounter(u32);
///
/// impl Observer for ReadingCounter {
///     fn update(&mut self, _measurement: Measurement) {
///         self.0 += 1;
///     }
/// }
///
/// let mut registry = ObserverRegistry::new();
/// let id = registry.register(Box::new(ReadingCounter(0)));
///
/// registry.notify_all(Measurement::new(80.0, 65.0, 30.4));
///
/// // Removal hands the observer (and its accumulated state) back.
/// let counter = registry.remove(id);
/// assert!(counter.is_some());
/// assert!(registry.is_empty());
/// ```
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer for subsequent broadcasts.
    ///
    /// The observer is appended to the ordered collection and will be
    /// notified after every observer registered before it. Returns the
    /// identity token used for removal.
    pub fn register(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));

        debug!(id = id.0, observers = self.observers.len(), "observer registered");
        id
    }

    /// Remove the registration identified by `id`.
    ///
    /// Returns the observer, handing its accumulated state back to the
    /// caller. Removing an unknown or already-removed token is a no-op and
    /// returns `None`; it is not an error.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let index = self.observers.iter().position(|(entry_id, _)| *entry_id == id)?;
        let (_, observer) = self.observers.remove(index);

        debug!(id = id.0, observers = self.observers.len(), "observer removed");
        Some(observer)
    }

    /// Notify every registered observer of a new measurement.
    ///
    /// Observers are invoked synchronously in registration order, each
    /// receiving the measurement by value. The mutable borrow taken here
    /// guarantees the observer set is a consistent snapshot for the whole
    /// broadcast: no registration or removal can interleave with it.
    pub fn notify_all(&mut self, measurement: Measurement) {
        trace!(observers = self.observers.len(), "broadcasting measurement");
        for (_, observer) in &mut self.observers {
            observer.update(measurement);
        }
    }

    /// Number of active registrations.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the registry has no registrations.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
