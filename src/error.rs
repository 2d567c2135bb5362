//! Fatal initialization errors.
//!
//! Every variant is terminal: the startup sequence stops at the failing step,
//! nothing is retried, and the top-level entry point reports the error.
//! Missing optional capabilities are not errors at all; see [`crate::handlers`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failure while bringing the surface, context, or shaders up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("browser environment unavailable: no {0}")]
    EnvironmentUnavailable(&'static str),
    #[error("container not found: {0}")]
    ContainerNotFound(String),
    #[error("surface creation failed: {0}")]
    SurfaceCreation(String),
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("shader source {name:?} failed to load: {reason}")]
    ShaderLoad { name: String, reason: String },
    #[error("render engine init failed: {0}")]
    EngineInit(String),
    #[error("event subscription failed: {0}")]
    Subscribe(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl InitError {
    /// Build a [`InitError::ShaderLoad`] for the named source.
    pub fn shader_load(name: &str, reason: impl Into<String>) -> Self {
        Self::ShaderLoad { name: name.to_owned(), reason: reason.into() }
    }
}
