//! Bridge configuration parsed from JSON.
//!
//! Every field is optional; `{}` (or an empty string) yields the defaults:
//!
//! - `container`: element id hosting the canvas, `<body>` when absent
//! - `vertex_shader` / `fragment_shader`: `main.vert` / `main.frag`
//! - `shader_base_url`: prefix for shader URLs, page-relative when empty
//! - `init_shaders`: `true`
//! - `render_on_input`: `true`
//! - `render_on_resize`: `false`
//! - `coalesce_resize`: `false`
//! - `log_level`: `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_FRAGMENT_SHADER, DEFAULT_LOG_LEVEL, DEFAULT_VERTEX_SHADER};
use crate::error::InitError;
use crate::loader::ShaderNames;
use crate::platform::Container;
use crate::render::RenderPolicy;
use crate::resize::ResizeMode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct BridgeConfig {
    pub container: Option<String>,
    pub vertex_shader: String,
    pub fragment_shader: String,
    pub shader_base_url: String,
    pub init_shaders: bool,
    pub render_on_input: bool,
    pub render_on_resize: bool,
    pub coalesce_resize: bool,
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            container: None,
            vertex_shader: DEFAULT_VERTEX_SHADER.to_owned(),
            fragment_shader: DEFAULT_FRAGMENT_SHADER.to_owned(),
            shader_base_url: String::new(),
            init_shaders: true,
            render_on_input: true,
            render_on_resize: false,
            coalesce_resize: false,
            log_level: DEFAULT_LOG_LEVEL.as_str().to_ascii_lowercase(),
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON object; blank input means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Config`] for malformed JSON, wrong field types,
    /// or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, InitError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| InitError::Config(err.to_string()))
    }

    /// Where to mount the surface.
    #[must_use]
    pub fn container(&self) -> Container {
        match self.container.as_deref().map(str::trim) {
            None | Some("") => Container::Body,
            Some(id) => Container::ElementId(id.trim_start_matches('#').to_owned()),
        }
    }

    #[must_use]
    pub fn shader_names(&self) -> ShaderNames {
        ShaderNames { vertex: self.vertex_shader.clone(), fragment: self.fragment_shader.clone() }
    }

    #[must_use]
    pub fn policy(&self) -> RenderPolicy {
        RenderPolicy { render_on_input: self.render_on_input, render_on_resize: self.render_on_resize }
    }

    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        if self.coalesce_resize { ResizeMode::CoalescePerFrame } else { ResizeMode::Immediate }
    }

    /// Configured log level; unknown names fall back to `info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
