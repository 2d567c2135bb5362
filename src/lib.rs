//! Browser-side coordination between DOM input/resize events and a render engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! startup ordering of a rendering surface: locate a container, create the
//! canvas, acquire a drawing context, load shader sources, and only then hand
//! control to the pointer and viewport event streams. Every event is
//! normalized (button bitmasks, floored pixel sizes) before it reaches the
//! engine. The render engine itself sits behind the [`render::RenderEngine`]
//! trait; the `engine` crate provides the WebGL2 implementation.
//!
//! Everything except [`dom`], [`webgl`] and [`entry`] is browser-independent
//! and tested natively against fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`input`] | Button flags, pointer and dimension samples |
//! | [`subscription`] | Register/unregister handle for event listeners |
//! | [`platform`] | Surface, viewport and context-factory traits |
//! | [`handlers`] | Optional capability record and `bind_handlers` |
//! | [`dispatch`] | Pointer-move forwarding |
//! | [`resize`] | Viewport resize tracking and surface mutation |
//! | [`render`] | Render engine capability and render policy |
//! | [`loader`] | Shader source loading with join semantics |
//! | [`lifecycle`] | Type-state startup sequence ending in [`lifecycle::Running`] |
//! | [`config`] | JSON configuration with defaults |
//! | [`error`] | Fatal initialization errors |
//! | [`consts`] | Shared defaults |
//! | `dom` | `web_sys` platform (feature `browser`) |
//! | `webgl` | Glue to the `engine` crate (feature `browser`) |
//! | `entry` | `wasm_bindgen` entry points (feature `browser`) |

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod input;
pub mod lifecycle;
pub mod loader;
pub mod platform;
pub mod render;
pub mod resize;
pub mod subscription;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod entry;
#[cfg(feature = "browser")]
pub mod webgl;

#[cfg(test)]
mod test_support;
