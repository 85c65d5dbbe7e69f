//! Observer port — receives notifications fanned out by the hub.

use std::sync::Arc;

use smarthub_domain::event::Event;

/// A listener the hub notifies synchronously after every change.
pub trait Observer {
    /// Handle one notification.
    fn receive(&self, event: &Event);
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn receive(&self, event: &Event) {
        (**self).receive(event);
    }
}
