//! Shader source loading.
//!
//! Vertex and fragment sources load concurrently and are joined: the result
//! is ready only once both have arrived, in whichever order, and the first
//! failure drops the other load.
//!
//! Client-side (browser): [`HttpShaderLoader`] fetches through `gloo-net`.
//! Everywhere: [`StaticShaderLoader`] serves sources held in memory.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::HashMap;
use std::future::Future;

use futures::future;

use crate::consts::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};
use crate::error::InitError;

/// Source of shader text by logical name.
pub trait ShaderLoader {
    /// Fetch the UTF-8 source called `name`.
    fn load(&self, name: &str) -> impl Future<Output = Result<String, InitError>>;
}

/// Logical names of the two shader stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderNames {
    pub vertex: String,
    pub fragment: String,
}

impl Default for ShaderNames {
    fn default() -> Self {
        Self { vertex: DEFAULT_VERTEX_SHADER.to_owned(), fragment: DEFAULT_FRAGMENT_SHADER.to_owned() }
    }
}

/// Loaded source text of both stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Load both stages concurrently.
///
/// # Errors
///
/// Returns the first [`InitError::ShaderLoad`] raised by either load.
pub async fn load_sources<L: ShaderLoader>(loader: &L, names: &ShaderNames) -> Result<ShaderSources, InitError> {
    log::debug!("shaders: loading {} and {}", names.vertex, names.fragment);
    let (vertex, fragment) = future::try_join(loader.load(&names.vertex), loader.load(&names.fragment)).await?;
    Ok(ShaderSources { vertex, fragment })
}

// =============================================================
// In-memory loader
// =============================================================

/// Serves sources from memory, e.g. shaders embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct StaticShaderLoader {
    sources: HashMap<String, String>,
}

impl StaticShaderLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.sources.insert(name.into(), source.into());
        self
    }
}

impl ShaderLoader for StaticShaderLoader {
    async fn load(&self, name: &str) -> Result<String, InitError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| InitError::shader_load(name, "not found"))
    }
}

// =============================================================
// HTTP loader
// =============================================================

/// Fetches sources over HTTP relative to `base_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpShaderLoader {
    base_url: String,
}

impl HttpShaderLoader {
    /// `base_url` may be empty (page-relative) and may end with a slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// URL the named source is fetched from.
    #[must_use]
    pub fn url_for(&self, name: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return name.to_owned();
        }
        format!("{base}/{}", name.trim_start_matches('/'))
    }
}

#[cfg(feature = "browser")]
impl ShaderLoader for HttpShaderLoader {
    async fn load(&self, name: &str) -> Result<String, InitError> {
        let url = self.url_for(name);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|err| InitError::shader_load(name, err.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(InitError::shader_load(name, format!("HTTP {status}")));
        }
        resp.text()
            .await
            .map_err(|err| InitError::shader_load(name, err.to_string()))
    }
}
