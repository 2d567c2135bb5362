//! The render engine capability consumed by the coordinator.
//!
//! All calls are synchronous and run to completion. Whether `render` redraws
//! the whole scene or only pending state is the engine's business.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::error::InitError;
use crate::input::DimensionSample;

/// Drawing operations issued against a rendering context.
pub trait RenderEngine {
    /// Handle through which the engine draws.
    type Context;

    /// Build the shader program from vertex and fragment source text.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EngineInit`] if compilation or linking fails.
    fn init(&mut self, context: &Self::Context, vertex_src: &str, fragment_src: &str) -> Result<(), InitError>;

    /// Produce a frame, at `size` when given.
    fn render(&mut self, context: &Self::Context, size: Option<DimensionSample>);

    /// Pointer moved to screen coordinates `(x, y)`.
    fn mousemove(&mut self, context: &Self::Context, x: i32, y: i32, clicked: bool);

    /// Surface backing dimensions changed.
    fn resize(&mut self, context: &Self::Context, width: u32, height: u32);
}

/// Which forwarded events are followed by a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Render right after every forwarded pointer sample.
    pub render_on_input: bool,
    /// Render right after every forwarded resize.
    pub render_on_resize: bool,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self { render_on_input: true, render_on_resize: false }
    }
}
