//! In-memory platform and engine doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::InitError;
use crate::input::{DimensionSample, PointerActivity};
use crate::platform::{Container, Platform, PointerListener, ResizeListener, Surface, Viewport};
use crate::render::RenderEngine;
use crate::subscription::Subscription;

// =============================================================
// Listener registry
// =============================================================

type Shared<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

struct ListenerList<T> {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(usize, Shared<T>)>>,
}

impl<T: Copy + 'static> ListenerList<T> {
    fn new() -> Rc<Self> {
        Rc::new(Self { next_id: Cell::new(0), entries: RefCell::new(Vec::new()) })
    }

    fn add(self: &Rc<Self>, listener: Box<dyn FnMut(T)>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(RefCell::new(listener))));
        let weak = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(list) = weak.upgrade() {
                list.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    fn emit(&self, value: T) {
        let snapshot: Vec<Shared<T>> = self.entries.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in snapshot {
            let mut guard = listener.borrow_mut();
            (*guard)(value);
        }
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

// =============================================================
// Surface
// =============================================================

struct SurfaceState {
    size: Cell<DimensionSample>,
    container: Cell<Option<(f64, f64)>>,
    pointer: Rc<ListenerList<PointerActivity>>,
    reject_subscriptions: Cell<bool>,
}

/// Surface whose container size and pointer activity are driven by the test.
#[derive(Clone)]
pub struct FakeSurface {
    state: Rc<SurfaceState>,
}

impl FakeSurface {
    pub fn with_container(client_width: f64, client_height: f64) -> Self {
        let surface = Self::detached();
        surface.state.container.set(Some((client_width, client_height)));
        surface
    }

    pub fn detached() -> Self {
        Self {
            state: Rc::new(SurfaceState {
                size: Cell::new(DimensionSample::new(300, 150)),
                container: Cell::new(None),
                pointer: ListenerList::new(),
                reject_subscriptions: Cell::new(false),
            }),
        }
    }

    pub fn set_container_size(&self, client_width: f64, client_height: f64) {
        self.state.container.set(Some((client_width, client_height)));
    }

    pub fn remove_container(&self) {
        self.state.container.set(None);
    }

    pub fn reject_subscriptions(&self) {
        self.state.reject_subscriptions.set(true);
    }

    pub fn move_pointer(&self, screen_x: i32, screen_y: i32, buttons: u16) {
        self.state.pointer.emit(PointerActivity { screen_x, screen_y, buttons });
    }

    pub fn pointer_listeners(&self) -> usize {
        self.state.pointer.len()
    }
}

impl Surface for FakeSurface {
    fn width(&self) -> u32 {
        self.state.size.get().width
    }

    fn height(&self) -> u32 {
        self.state.size.get().height
    }

    fn set_size(&self, size: DimensionSample) {
        self.state.size.set(size);
    }

    fn container_client_size(&self) -> Option<(f64, f64)> {
        self.state.container.get()
    }

    fn on_pointer_move(&self, listener: PointerListener) -> Result<Subscription, InitError> {
        if self.state.reject_subscriptions.get() {
            return Err(InitError::Subscribe("mousemove rejected".into()));
        }
        Ok(self.state.pointer.add(listener))
    }
}

// =============================================================
// Viewport
// =============================================================

struct ViewportState {
    resize: Rc<ListenerList<()>>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    reject_frames: Cell<bool>,
}

/// Viewport whose resize activity and animation frames are driven by the test.
#[derive(Clone)]
pub struct FakeViewport {
    state: Rc<ViewportState>,
}

impl FakeViewport {
    pub fn new() -> Self {
        Self {
            state: Rc::new(ViewportState {
                resize: ListenerList::new(),
                frames: RefCell::new(Vec::new()),
                reject_frames: Cell::new(false),
            }),
        }
    }

    pub fn fire_resize(&self) {
        self.state.resize.emit(());
    }

    pub fn resize_listeners(&self) -> usize {
        self.state.resize.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.frames.borrow().len()
    }

    /// Run every frame callback queued so far.
    pub fn run_frames(&self) {
        let frames: Vec<Box<dyn FnOnce()>> = self.state.frames.borrow_mut().drain(..).collect();
        for frame in frames {
            frame();
        }
    }

    pub fn reject_frames(&self) {
        self.state.reject_frames.set(true);
    }
}

impl Viewport for FakeViewport {
    fn on_resize(&self, mut listener: ResizeListener) -> Result<Subscription, InitError> {
        Ok(self.state.resize.add(Box::new(move |()| listener())))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), InitError> {
        if self.state.reject_frames.get() {
            return Err(InitError::Subscribe("requestAnimationFrame rejected".into()));
        }
        self.state.frames.borrow_mut().push(callback);
        Ok(())
    }
}

// =============================================================
// Platform
// =============================================================

/// Opaque context handle handed out by [`FakePlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeContext(pub u32);

pub struct FakePlatform {
    pub surface: FakeSurface,
    pub viewport: FakeViewport,
    pub container_present: bool,
    pub context_available: bool,
    pub surfaces_created: Cell<u32>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            surface: FakeSurface::with_container(800.0, 600.0),
            viewport: FakeViewport::new(),
            container_present: true,
            context_available: true,
            surfaces_created: Cell::new(0),
        }
    }
}

impl Platform for FakePlatform {
    type Surface = FakeSurface;
    type Context = FakeContext;
    type Viewport = FakeViewport;

    fn create_surface(&self, container: &Container) -> Result<FakeSurface, InitError> {
        if !self.container_present {
            return Err(InitError::ContainerNotFound(container.to_string()));
        }
        self.surfaces_created.set(self.surfaces_created.get() + 1);
        if let Some((client_width, client_height)) = self.surface.container_client_size() {
            self.surface.set_size(DimensionSample::from_client_size(client_width, client_height));
        }
        Ok(self.surface.clone())
    }

    fn create_context(&self, _surface: &FakeSurface) -> Result<FakeContext, InitError> {
        if !self.context_available {
            return Err(InitError::ContextUnavailable("webgl2 unsupported".into()));
        }
        Ok(FakeContext(7))
    }

    fn viewport(&self) -> FakeViewport {
        self.viewport.clone()
    }
}

// =============================================================
// Engine
// =============================================================

/// One call received by [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Init { vertex: String, fragment: String },
    Render(Option<DimensionSample>),
    MouseMove(i32, i32, bool),
    Resize(u32, u32),
}

/// Engine that records every call into a shared log.
pub struct RecordingEngine {
    pub calls: Rc<RefCell<Vec<EngineCall>>>,
    pub fail_init: Option<String>,
}

impl RecordingEngine {
    pub fn new() -> (Self, Rc<RefCell<Vec<EngineCall>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (Self { calls: Rc::clone(&calls), fail_init: None }, calls)
    }
}

impl RenderEngine for RecordingEngine {
    type Context = FakeContext;

    fn init(&mut self, _context: &FakeContext, vertex_src: &str, fragment_src: &str) -> Result<(), InitError> {
        if let Some(reason) = &self.fail_init {
            return Err(InitError::EngineInit(reason.clone()));
        }
        self.calls
            .borrow_mut()
            .push(EngineCall::Init { vertex: vertex_src.to_owned(), fragment: fragment_src.to_owned() });
        Ok(())
    }

    fn render(&mut self, _context: &FakeContext, size: Option<DimensionSample>) {
        self.calls.borrow_mut().push(EngineCall::Render(size));
    }

    fn mousemove(&mut self, _context: &FakeContext, x: i32, y: i32, clicked: bool) {
        self.calls.borrow_mut().push(EngineCall::MouseMove(x, y, clicked));
    }

    fn resize(&mut self, _context: &FakeContext, width: u32, height: u32) {
        self.calls.borrow_mut().push(EngineCall::Resize(width, height));
    }
}
