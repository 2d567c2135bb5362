//! Register/unregister handle for platform event listeners.
//!
//! A `Subscription` is returned by whoever registered a listener and carries
//! the matching removal action. The owner decides the listener's lifetime:
//! dropping or calling [`Subscription::unregister`] removes it, and
//! [`Subscription::detach`] keeps it registered for the rest of the page.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Handle to one registered listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    unregister: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that removes the listener.
    pub fn new(unregister: impl FnOnce() + 'static) -> Self {
        Self { unregister: Some(Box::new(unregister)) }
    }

    /// Remove the listener now.
    pub fn unregister(mut self) {
        self.release();
    }

    /// Give up the handle and leave the listener registered.
    ///
    /// The removal action is leaked, along with anything it owns (for DOM
    /// listeners, the wasm closure the browser still calls into).
    pub fn detach(mut self) {
        if let Some(unregister) = self.unregister.take() {
            std::mem::forget(unregister);
        }
    }

    fn release(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unregister.is_some())
            .finish()
    }
}
