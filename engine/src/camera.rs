#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::{Mat4, Quat, Vec3};

use crate::consts::{FAR_CLIP, FOVY, NEAR_CLIP, PAN_SCALE};

/// Perspective camera that pans in its own view plane.
///
/// The camera starts at the origin facing down -Z with +Y up, so the quad in
/// [`crate::consts::QUAD_VERTICES`] sits one unit in front of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Camera {
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fovy: FOVY,
            aspect,
            near: NEAR_CLIP,
            far: FAR_CLIP,
        }
    }

    /// Camera whose aspect matches a `width` x `height` surface.
    #[must_use]
    pub fn for_size(width: u32, height: u32) -> Self {
        let mut camera = Self::default();
        camera.set_aspect(width, height);
        camera
    }

    /// Update the aspect ratio. An empty surface keeps the previous ratio.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Pan by a drag delta expressed as a fraction of the surface size.
    ///
    /// Screen-space `dy` grows downward. The camera moves opposite to the
    /// pointer so the scene follows it.
    pub fn translate_from_pixels(&mut self, dx: f32, dy: f32) {
        let local = Vec3::new(-dx * PAN_SCALE, dy * PAN_SCALE, 0.0);
        self.position += self.rotation * local;
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Column-major matrix ready for `uniformMatrix4fv`.
    #[must_use]
    pub fn view_proj_array(&self) -> [f32; 16] {
        self.view_proj().to_cols_array()
    }
}
