//! Shader compilation and program linking.

use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram, WebGlShader};

use crate::consts::POSITION_ATTRIBUTE;
use crate::error::EngineError;

/// Compile one shader stage. `kind` is `Gl::VERTEX_SHADER` or `Gl::FRAGMENT_SHADER`.
///
/// # Errors
///
/// Returns [`EngineError::ShaderCompile`] carrying the driver's info log.
pub fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, EngineError> {
    let shader = gl.create_shader(kind).ok_or(EngineError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }
    let info_log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| "unknown error".to_owned());
    gl.delete_shader(Some(&shader));
    log::warn!("shader: compile failed: {info_log}");
    Err(EngineError::ShaderCompile(info_log))
}

/// Link a vertex and fragment stage into a program.
///
/// The position attribute is pinned to location 0 before linking.
///
/// # Errors
///
/// Returns [`EngineError::ProgramLink`] carrying the driver's info log.
pub fn link_program(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, EngineError> {
    let program = gl.create_program().ok_or(EngineError::Resource("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.bind_attrib_location(&program, 0, POSITION_ATTRIBUTE);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }
    let info_log = gl
        .get_program_info_log(&program)
        .unwrap_or_else(|| "unknown error".to_owned());
    gl.delete_program(Some(&program));
    log::warn!("shader: link failed: {info_log}");
    Err(EngineError::ProgramLink(info_log))
}

/// Compile both stages and link them. Stage objects are released either way.
///
/// # Errors
///
/// Propagates the first compile or link failure.
pub fn build_program(gl: &Gl, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram, EngineError> {
    let vertex = compile_shader(gl, Gl::VERTEX_SHADER, vertex_src)?;
    let fragment = match compile_shader(gl, Gl::FRAGMENT_SHADER, fragment_src) {
        Ok(fragment) => fragment,
        Err(err) => {
            gl.delete_shader(Some(&vertex));
            return Err(err);
        }
    };
    let program = link_program(gl, &vertex, &fragment);
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));
    program
}
