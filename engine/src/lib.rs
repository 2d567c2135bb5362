//! WebGL2 scene engine driven by the render bridge.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! single untextured quad through a user-supplied shader program and lets
//! the user pan the camera by dragging with the primary button. The bridge
//! decides when to call in; this crate only decides what a frame looks like.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Top-level [`scene::Scene`] and testable [`scene::SceneCore`] |
//! | [`camera`] | Perspective camera and pixel-driven panning |
//! | [`drag`] | Pointer drag state machine |
//! | [`shader`] | Shader compilation and program linking |
//! | [`render`] | Quad upload and per-frame draw calls |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared numeric constants (clip planes, clear color, quad mesh) |

pub mod camera;
pub mod consts;
pub mod drag;
pub mod error;
pub mod render;
pub mod scene;
pub mod shader;

pub use scene::Scene;
