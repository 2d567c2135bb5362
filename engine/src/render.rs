//! Rendering: uploads the quad mesh and issues per-frame draw calls.
//!
//! This module and [`crate::shader`] are the only places that call into
//! [`web_sys::WebGl2RenderingContext`]. Drawing reads camera state and never
//! mutates it.

use web_sys::{WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram};

use crate::camera::Camera;
use crate::consts::{CLEAR_COLOR, QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTICES, VIEW_PROJ_UNIFORM};
use crate::error::EngineError;

/// GPU buffers for the quad.
#[derive(Debug, Clone)]
pub struct QuadMesh {
    vertices: WebGlBuffer,
    indices: WebGlBuffer,
}

impl QuadMesh {
    /// Upload [`QUAD_VERTICES`] and [`QUAD_INDICES`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Resource`] if the context cannot allocate a buffer.
    pub fn upload(gl: &Gl) -> Result<Self, EngineError> {
        let vertices = gl.create_buffer().ok_or(EngineError::Resource("vertex buffer"))?;
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&vertices));
        gl.buffer_data_with_array_buffer_view(
            Gl::ARRAY_BUFFER,
            &js_sys::Float32Array::from(&QUAD_VERTICES[..]),
            Gl::STATIC_DRAW,
        );

        let Some(indices) = gl.create_buffer() else {
            gl.delete_buffer(Some(&vertices));
            return Err(EngineError::Resource("index buffer"));
        };
        gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            Gl::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint16Array::from(&QUAD_INDICES[..]),
            Gl::STATIC_DRAW,
        );

        Ok(Self { vertices, indices })
    }

    pub fn delete(&self, gl: &Gl) {
        gl.delete_buffer(Some(&self.vertices));
        gl.delete_buffer(Some(&self.indices));
    }
}

fn to_gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Draw one frame at `width` x `height` device pixels.
///
/// Without a program or mesh the frame is only cleared.
///
/// # Errors
///
/// Returns [`EngineError::Resource`] if the program lacks the
/// view-projection uniform.
pub fn draw(
    gl: &Gl,
    program: Option<&WebGlProgram>,
    mesh: Option<&QuadMesh>,
    camera: &Camera,
    width: u32,
    height: u32,
) -> Result<(), EngineError> {
    gl.viewport(0, 0, to_gl_size(width), to_gl_size(height));
    let [r, g, b, a] = CLEAR_COLOR;
    gl.clear_color(r, g, b, a);
    gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

    let (Some(program), Some(mesh)) = (program, mesh) else {
        return Ok(());
    };

    gl.use_program(Some(program));
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&mesh.vertices));
    gl.vertex_attrib_pointer_with_i32(0, 3, Gl::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(0);
    gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&mesh.indices));

    let location = gl
        .get_uniform_location(program, VIEW_PROJ_UNIFORM)
        .ok_or(EngineError::Resource("view_proj uniform"))?;
    gl.uniform_matrix4fv_with_f32_array(Some(&location), false, &camera.view_proj_array());

    gl.draw_elements_with_i32(Gl::TRIANGLES, QUAD_INDEX_COUNT, Gl::UNSIGNED_SHORT, 0);
    Ok(())
}
