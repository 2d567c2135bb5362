//! Optional event capabilities and their binding to a surface.
//!
//! A capability that is absent gets no subscription at all, not a no-op
//! listener. [`Bindings`] records which subscriptions exist and owns them.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use std::fmt;

use crate::dispatch::bind_input;
use crate::error::InitError;
use crate::platform::{Surface, Viewport};
use crate::resize::{ResizeMode, bind_resize};
use crate::subscription::Subscription;

/// `mousemove(x, y, clicked)` capability.
pub type MouseMoveFn = Box<dyn FnMut(i32, i32, bool)>;

/// `resize(width, height)` capability.
pub type ResizeFn = Box<dyn FnMut(u32, u32)>;

/// Caller-supplied capabilities, each independently optional.
#[derive(Default)]
pub struct HandlerConfig {
    pub mousemove: Option<MouseMoveFn>,
    pub resize: Option<ResizeFn>,
}

impl HandlerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mousemove(mut self, mousemove: impl FnMut(i32, i32, bool) + 'static) -> Self {
        self.mousemove = Some(Box::new(mousemove));
        self
    }

    #[must_use]
    pub fn with_resize(mut self, resize: impl FnMut(u32, u32) + 'static) -> Self {
        self.resize = Some(Box::new(resize));
        self
    }
}

impl fmt::Debug for HandlerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("mousemove", &self.mousemove.is_some())
            .field("resize", &self.resize.is_some())
            .finish()
    }
}

/// Subscriptions created by [`bind_handlers`].
#[derive(Debug, Default)]
pub struct Bindings {
    pointer: Option<Subscription>,
    resize: Option<Subscription>,
}

impl Bindings {
    /// Whether pointer-move activity is subscribed.
    #[must_use]
    pub fn has_pointer(&self) -> bool {
        self.pointer.is_some()
    }

    /// Whether viewport resize activity is subscribed.
    #[must_use]
    pub fn has_resize(&self) -> bool {
        self.resize.is_some()
    }

    /// Remove every listener.
    pub fn unbind(self) {
        if let Some(pointer) = self.pointer {
            pointer.unregister();
        }
        if let Some(resize) = self.resize {
            resize.unregister();
        }
    }

    /// Keep every listener registered for the rest of the page.
    pub fn detach(self) {
        if let Some(pointer) = self.pointer {
            pointer.detach();
        }
        if let Some(resize) = self.resize {
            resize.detach();
        }
    }
}

/// Bind each present capability to its event source.
///
/// `mousemove` listens on the surface; `resize` listens on the viewport and
/// additionally requires the surface to have a container.
///
/// # Errors
///
/// Returns [`InitError::Subscribe`] if a listener cannot be registered. Any
/// subscription created before the failure is removed again.
pub fn bind_handlers<S, V>(
    surface: &S,
    viewport: &V,
    handlers: HandlerConfig,
    mode: ResizeMode,
) -> Result<Bindings, InitError>
where
    S: Surface + Clone + 'static,
    V: Viewport + Clone + 'static,
{
    let HandlerConfig { mousemove, resize } = handlers;
    let pointer = bind_input(surface, mousemove)?;
    let resize = bind_resize(surface, viewport, resize, mode)?;
    Ok(Bindings { pointer, resize })
}
