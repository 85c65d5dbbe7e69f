//! Built-in [`Observer`] implementations.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthub_domain::event::Event;

use crate::ports::Observer;

/// Writes every notification to the log under the observer's name.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    name: String,
}

impl LoggingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for LoggingObserver {
    fn receive(&self, event: &Event) {
        tracing::info!(
            observer = %self.name,
            event_id = %event.id,
            device_id = %event.device_id,
            "notification: {event}"
        );
    }
}

/// Keeps every notification in memory, in arrival order.
///
/// Share it with the hub through an `Arc` and read it back afterwards.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// The notification messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Observer for RecordingObserver {
    fn receive(&self, event: &Event) {
        self.lock().push(event.clone());
    }
}
