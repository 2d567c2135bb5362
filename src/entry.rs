//! `wasm_bindgen` entry points.
//!
//! `run` is fire-and-forget: it starts the bridge, reports failures to the
//! console, and keeps the listeners alive for the rest of the page. `start`
//! resolves to an [`App`] handle so the host page can drive renders and shut
//! the bridge down itself.

use std::sync::Once;

use engine::Scene;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use crate::config::BridgeConfig;
use crate::consts::DEFAULT_LOG_LEVEL;
use crate::dom::DomPlatform;
use crate::error::InitError;
use crate::lifecycle::{Running, launch};
use crate::loader::HttpShaderLoader;
use crate::platform::Surface;

static LOGGING: Once = Once::new();

/// Route `log` output and panics to the browser console. Only the first call
/// has any effect.
fn init_logging(level: log::Level) {
    LOGGING.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        if let Err(err) = console_log::init_with_level(level) {
            log::warn!("console logger not installed: {err}");
        }
    });
}

async fn boot(raw_config: Option<String>) -> Result<Running<DomPlatform, Scene>, InitError> {
    let parsed = BridgeConfig::from_json(raw_config.as_deref().unwrap_or_default());
    init_logging(parsed.as_ref().map_or(DEFAULT_LOG_LEVEL, BridgeConfig::log_level));
    let config = parsed?;

    let platform = DomPlatform::new()?;
    let loader = HttpShaderLoader::new(config.shader_base_url.clone());
    launch(platform, Scene::default(), &config, &loader).await
}

/// Start the bridge and leave it running for the life of the page.
///
/// `config` is an optional JSON object; see [`BridgeConfig`].
#[wasm_bindgen]
pub fn run(config: Option<String>) {
    wasm_bindgen_futures::spawn_local(async move {
        match boot(config).await {
            Ok(running) => running.detach(),
            Err(err) => log::error!("render bridge failed to start: {err}"),
        }
    });
}

/// Start the bridge and return a handle to it.
///
/// # Errors
///
/// Rejects with the [`InitError`] message if any startup step fails.
#[wasm_bindgen]
pub async fn start(config: Option<String>) -> Result<App, JsValue> {
    boot(config)
        .await
        .map(|running| App { running })
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// A running bridge owned by the host page.
#[wasm_bindgen]
pub struct App {
    running: Running<DomPlatform, Scene>,
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.running.surface().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.running.surface().height()
    }

    /// The canvas the bridge created.
    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.running.surface().canvas().clone()
    }

    /// The WebGL2 context the scene draws through.
    #[wasm_bindgen(getter)]
    pub fn context(&self) -> WebGl2RenderingContext {
        self.running.context().clone()
    }

    /// Draw a frame now. Returns `false` if the scene was busy.
    pub fn render(&self) -> bool {
        self.running.render()
    }

    /// Remove listeners, release GPU resources and detach the canvas.
    pub fn shutdown(self) {
        self.running.with_engine(|scene, gl| scene.dispose(gl));
        let (surface, _context) = self.running.shutdown();
        surface.canvas().remove();
    }
}
