//! Platform seams: the drawing surface, the global viewport, and the factory
//! that produces surfaces and rendering contexts.
//!
//! The browser implementation lives in `dom`; tests use in-memory fakes.
//! Listener registration returns a [`Subscription`] so the caller owns the
//! listener's lifetime.

use crate::error::InitError;
use crate::input::{DimensionSample, PointerActivity};
use crate::subscription::Subscription;

/// Listener for pointer-move activity on a surface.
pub type PointerListener = Box<dyn FnMut(PointerActivity)>;

/// Listener for viewport resize activity.
pub type ResizeListener = Box<dyn FnMut()>;

/// Where the surface is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Container {
    /// The document body.
    #[default]
    Body,
    /// The element with this id.
    ElementId(String),
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body => f.write_str("<body>"),
            Self::ElementId(id) => write!(f, "#{id}"),
        }
    }
}

/// The drawing canvas and its mutable backing dimensions.
pub trait Surface {
    /// Backing width in pixels.
    fn width(&self) -> u32;

    /// Backing height in pixels.
    fn height(&self) -> u32;

    /// Replace the backing dimensions.
    fn set_size(&self, size: DimensionSample);

    /// Current client size of the containing element, if there is one.
    fn container_client_size(&self) -> Option<(f64, f64)>;

    /// Subscribe to pointer-move activity on this surface.
    ///
    /// The registration must be passive: the platform's default handling
    /// (scrolling and the like) stays available.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Subscribe`] if the platform rejects the listener.
    fn on_pointer_move(&self, listener: PointerListener) -> Result<Subscription, InitError>;

    /// Whether the surface has a containing element.
    fn has_container(&self) -> bool {
        self.container_client_size().is_some()
    }

    /// Current backing dimensions.
    fn size(&self) -> DimensionSample {
        DimensionSample::new(self.width(), self.height())
    }
}

/// The global viewport: source of resize activity and animation frames.
pub trait Viewport {
    /// Subscribe to resize activity.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Subscribe`] if the platform rejects the listener.
    fn on_resize(&self, listener: ResizeListener) -> Result<Subscription, InitError>;

    /// Run `callback` once before the next repaint.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Subscribe`] if the frame could not be scheduled.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), InitError>;
}

/// Factory for surfaces and rendering contexts.
pub trait Platform {
    type Surface: Surface + Clone + 'static;
    type Context: Clone + 'static;
    type Viewport: Viewport + Clone + 'static;

    /// Create the drawing surface inside `container`.
    ///
    /// # Errors
    ///
    /// Fails when the container cannot be resolved or the surface cannot be
    /// attached to it.
    fn create_surface(&self, container: &Container) -> Result<Self::Surface, InitError>;

    /// Acquire a rendering context bound to `surface`.
    ///
    /// # Errors
    ///
    /// Fails when the platform or driver does not support the context kind.
    fn create_context(&self, surface: &Self::Surface) -> Result<Self::Context, InitError>;

    /// The viewport that delivers resize activity.
    fn viewport(&self) -> Self::Viewport;
}
