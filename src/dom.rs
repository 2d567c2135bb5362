//! `web_sys` implementation of the platform seams.
//!
//! This module is the only place that touches DOM elements and listeners.
//! JS exceptions are turned into [`InitError`] strings at this boundary.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext, Window};

use crate::consts::{CONTEXT_KIND, POINTER_MOVE_EVENT, RESIZE_EVENT};
use crate::error::InitError;
use crate::input::{DimensionSample, PointerActivity};
use crate::platform::{Container, Platform, PointerListener, ResizeListener, Surface, Viewport};
use crate::subscription::Subscription;

/// Render a JS exception for logs and errors.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================
// Surface
// =============================================================

/// A `<canvas>` element and its parent.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&self, size: DimensionSample) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn container_client_size(&self) -> Option<(f64, f64)> {
        self.canvas
            .parent_element()
            .map(|parent| (f64::from(parent.client_width()), f64::from(parent.client_height())))
    }

    fn on_pointer_move(&self, mut listener: PointerListener) -> Result<Subscription, InitError> {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            listener(PointerActivity {
                screen_x: event.screen_x(),
                screen_y: event.screen_y(),
                buttons: event.buttons(),
            });
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.canvas
            .add_event_listener_with_callback_and_add_event_listener_options(
                POINTER_MOVE_EVENT,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| InitError::Subscribe(describe(&err)))?;

        let canvas = self.canvas.clone();
        Ok(Subscription::new(move || {
            if let Err(err) =
                canvas.remove_event_listener_with_callback(POINTER_MOVE_EVENT, closure.as_ref().unchecked_ref())
            {
                log::warn!("dom: removing {POINTER_MOVE_EVENT} listener failed: {}", describe(&err));
            }
            drop(closure);
        }))
    }
}

// =============================================================
// Viewport
// =============================================================

/// The browser window.
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: Window,
}

impl Viewport for WindowViewport {
    fn on_resize(&self, mut listener: ResizeListener) -> Result<Subscription, InitError> {
        let closure = Closure::<dyn FnMut()>::new(move || listener());
        self.window
            .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|err| InitError::Subscribe(describe(&err)))?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            {
                log::warn!("dom: removing {RESIZE_EVENT} listener failed: {}", describe(&err));
            }
            drop(closure);
        }))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), InitError> {
        let callback = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(callback.unchecked_ref())
            .map(|_handle| ())
            .map_err(|err| InitError::Subscribe(describe(&err)))
    }
}

// =============================================================
// Platform
// =============================================================

/// Creates canvases in the current document and WebGL2 contexts on them.
#[derive(Debug, Clone)]
pub struct DomPlatform {
    window: Window,
    document: Document,
}

impl DomPlatform {
    /// Bind to the global `window` and its `document`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EnvironmentUnavailable`] outside a browser page.
    pub fn new() -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::EnvironmentUnavailable("window"))?;
        let document = window.document().ok_or(InitError::EnvironmentUnavailable("document"))?;
        Ok(Self { window, document })
    }

    fn resolve(&self, container: &Container) -> Result<Element, InitError> {
        let element = match container {
            Container::Body => self.document.body().map(Element::from),
            Container::ElementId(id) => self.document.get_element_by_id(id),
        };
        element.ok_or_else(|| InitError::ContainerNotFound(container.to_string()))
    }
}

impl Platform for DomPlatform {
    type Surface = CanvasSurface;
    type Context = WebGl2RenderingContext;
    type Viewport = WindowViewport;

    fn create_surface(&self, container: &Container) -> Result<CanvasSurface, InitError> {
        let parent = self.resolve(container)?;
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|err| InitError::SurfaceCreation(describe(&err)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| InitError::SurfaceCreation("created element is not a canvas".into()))?;
        parent
            .append_child(&canvas)
            .map_err(|err| InitError::SurfaceCreation(describe(&err)))?;

        let surface = CanvasSurface::new(canvas);
        if let Some((client_width, client_height)) = surface.container_client_size() {
            surface.set_size(DimensionSample::from_client_size(client_width, client_height));
        }
        log::debug!("dom: canvas mounted in {container} at {}x{}", surface.width(), surface.height());
        Ok(surface)
    }

    fn create_context(&self, surface: &CanvasSurface) -> Result<WebGl2RenderingContext, InitError> {
        let context = surface
            .canvas()
            .get_context(CONTEXT_KIND)
            .map_err(|err| InitError::ContextUnavailable(describe(&err)))?
            .ok_or_else(|| InitError::ContextUnavailable(format!("{CONTEXT_KIND} not supported")))?;
        context
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| InitError::ContextUnavailable(format!("{CONTEXT_KIND} context has unexpected type")))
    }

    fn viewport(&self) -> WindowViewport {
        WindowViewport { window: self.window.clone() }
    }
}
