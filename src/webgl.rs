//! Hooks the WebGL2 [`Scene`] into the coordinator.

use engine::Scene;
use web_sys::WebGl2RenderingContext;

use crate::error::InitError;
use crate::input::DimensionSample;
use crate::render::RenderEngine;

impl RenderEngine for Scene {
    type Context = WebGl2RenderingContext;

    fn init(&mut self, gl: &WebGl2RenderingContext, vertex_src: &str, fragment_src: &str) -> Result<(), InitError> {
        Scene::init(self, gl, vertex_src, fragment_src).map_err(|err| InitError::EngineInit(err.to_string()))
    }

    fn render(&mut self, gl: &WebGl2RenderingContext, size: Option<DimensionSample>) {
        let size = size.map(|sample| (sample.width, sample.height));
        if let Err(err) = Scene::render(self, gl, size) {
            log::error!("render: frame failed: {err}");
        }
    }

    fn mousemove(&mut self, _gl: &WebGl2RenderingContext, x: i32, y: i32, clicked: bool) {
        Scene::mousemove(self, x, y, clicked);
    }

    fn resize(&mut self, _gl: &WebGl2RenderingContext, width: u32, height: u32) {
        Scene::resize(self, width, height);
    }
}
