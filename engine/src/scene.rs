use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram};

use crate::camera::Camera;
use crate::drag::DragTracker;
use crate::error::EngineError;
use crate::render::{self, QuadMesh};
use crate::shader;

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

/// Scene state that doesn't depend on a GL context.
///
/// Separated from `Scene` so it can be tested without a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneCore {
    pub camera: Camera,
    pub drag: DragTracker,
    pub width: u32,
    pub height: u32,
}

impl SceneCore {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Camera::for_size(width, height),
            drag: DragTracker::default(),
            width,
            height,
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Feed a pointer sample. Returns `true` if the camera moved.
    pub fn pointer(&mut self, x: i32, y: i32, clicked: bool) -> bool {
        let Some(delta) = self.drag.update(x, y, clicked) else {
            return false;
        };
        if delta.is_zero() {
            return false;
        }
        let Some((dx, dy)) = delta.normalized(self.width, self.height) else {
            return false;
        };
        self.camera.translate_from_pixels(dx, dy);
        true
    }

    /// Adopt a new surface size. Any drag in progress is dropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.camera.set_aspect(width, height);
        self.drag.reset();
    }
}

/// The WebGL2 scene. Wraps `SceneCore` and owns the GPU resources.
#[derive(Debug, Default)]
pub struct Scene {
    pub core: SceneCore,
    program: Option<WebGlProgram>,
    mesh: Option<QuadMesh>,
}

impl Scene {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { core: SceneCore::new(width, height), program: None, mesh: None }
    }

    /// Whether `init` has completed and frames will draw the quad.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.program.is_some() && self.mesh.is_some()
    }

    /// Build the shader program and upload the quad.
    ///
    /// Calling this again replaces the previous program and buffers.
    ///
    /// # Errors
    ///
    /// Returns the first shader, link, or allocation failure. The scene is
    /// left without GPU resources in that case.
    pub fn init(&mut self, gl: &Gl, vertex_src: &str, fragment_src: &str) -> Result<(), EngineError> {
        self.dispose(gl);
        let program = shader::build_program(gl, vertex_src, fragment_src)?;
        let mesh = match QuadMesh::upload(gl) {
            Ok(mesh) => mesh,
            Err(err) => {
                gl.delete_program(Some(&program));
                return Err(err);
            }
        };
        self.program = Some(program);
        self.mesh = Some(mesh);
        log::debug!("scene: program linked, quad uploaded");
        Ok(())
    }

    /// Draw one frame. A `size` different from the current one is adopted first.
    ///
    /// # Errors
    ///
    /// Propagates draw failures from [`render::draw`].
    pub fn render(&mut self, gl: &Gl, size: Option<(u32, u32)>) -> Result<(), EngineError> {
        if let Some((width, height)) = size {
            if (width, height) != self.core.size() {
                self.core.resize(width, height);
            }
        }
        render::draw(
            gl,
            self.program.as_ref(),
            self.mesh.as_ref(),
            &self.core.camera,
            self.core.width,
            self.core.height,
        )
    }

    pub fn mousemove(&mut self, x: i32, y: i32, clicked: bool) -> bool {
        self.core.pointer(x, y, clicked)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Release the program and buffers.
    pub fn dispose(&mut self, gl: &Gl) {
        if let Some(program) = self.program.take() {
            gl.delete_program(Some(&program));
        }
        if let Some(mesh) = self.mesh.take() {
            mesh.delete(gl);
        }
    }
}
