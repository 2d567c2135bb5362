//! Shared defaults for the bridge crate.

// ── Shaders ─────────────────────────────────────────────────────

/// Logical name of the vertex shader source.
pub const DEFAULT_VERTEX_SHADER: &str = "main.vert";

/// Logical name of the fragment shader source.
pub const DEFAULT_FRAGMENT_SHADER: &str = "main.frag";

// ── DOM ─────────────────────────────────────────────────────────

/// Pointer activity the input dispatcher listens for on the surface.
pub const POINTER_MOVE_EVENT: &str = "mousemove";

/// Viewport activity the resize tracker listens for on the window.
pub const RESIZE_EVENT: &str = "resize";

/// Context id requested from the canvas.
pub const CONTEXT_KIND: &str = "webgl2";

// ── Logging ─────────────────────────────────────────────────────

/// Log level used when the configuration does not name a valid one.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
