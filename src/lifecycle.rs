//! Startup ordering as a type-state machine.
//!
//! ```text
//! RenderCoordinator ──acquire_surface──▶ SurfaceReady ──acquire_context──▶ ContextReady
//!                                                                           │        │
//!                                                               load_shaders│        │run (no shaders)
//!                                                                           ▼        │
//!                                                                      ShadersReady  │
//!                                                                           │run     │
//!                                                                           ▼        ▼
//!                                                                            Running
//! ```
//!
//! Every transition consumes the previous state. The engine is reachable for
//! drawing only through [`Running`], so no frame can be requested before the
//! context exists (or, in the shader variant, before shaders are built).
//! Any error ends the sequence; there is no retry and no degraded mode.
//!
//! Once running, the engine is shared between the pointer and resize
//! closures through `Rc<RefCell<_>>`. Execution is single-threaded, so the
//! only discipline needed is the resize tracker's mutate-then-invoke order.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::BridgeConfig;
use crate::error::InitError;
use crate::handlers::{Bindings, HandlerConfig, bind_handlers};
use crate::input::DimensionSample;
use crate::loader::{ShaderLoader, ShaderNames, load_sources};
use crate::platform::{Container, Platform, Surface};
use crate::render::{RenderEngine, RenderPolicy};
use crate::resize::ResizeMode;

/// Lifecycle position, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    SurfaceReady,
    ContextReady,
    ShadersReady,
    Running,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::SurfaceReady => "surface-ready",
            Self::ContextReady => "context-ready",
            Self::ShadersReady => "shaders-ready",
            Self::Running => "running",
        };
        f.write_str(name)
    }
}

fn transition(from: Phase, to: Phase) {
    log::debug!("lifecycle: {from} -> {to}");
}

// =============================================================
// Uninitialized
// =============================================================

/// Entry state: nothing acquired yet.
pub struct RenderCoordinator<P, E> {
    platform: P,
    engine: E,
    policy: RenderPolicy,
    resize_mode: ResizeMode,
}

impl<P, E> RenderCoordinator<P, E>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
{
    pub fn new(platform: P, engine: E, policy: RenderPolicy) -> Self {
        Self { platform, engine, policy, resize_mode: ResizeMode::default() }
    }

    /// Choose how resize activity maps onto recomputes.
    #[must_use]
    pub fn with_resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::Uninitialized
    }

    /// Create the drawing surface inside `container`.
    ///
    /// # Errors
    ///
    /// Fails when the container cannot be resolved.
    pub fn acquire_surface(self, container: &Container) -> Result<SurfaceReady<P, E>, InitError> {
        let surface = self.platform.create_surface(container)?;
        transition(Phase::Uninitialized, Phase::SurfaceReady);
        Ok(SurfaceReady {
            platform: self.platform,
            engine: self.engine,
            policy: self.policy,
            resize_mode: self.resize_mode,
            surface,
        })
    }
}

// =============================================================
// SurfaceReady
// =============================================================

/// The surface exists; no rendering context yet.
pub struct SurfaceReady<P: Platform, E> {
    platform: P,
    engine: E,
    policy: RenderPolicy,
    resize_mode: ResizeMode,
    surface: P::Surface,
}

impl<P, E> SurfaceReady<P, E>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
{
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::SurfaceReady
    }

    #[must_use]
    pub fn surface(&self) -> &P::Surface {
        &self.surface
    }

    /// Acquire a rendering context bound to the surface.
    ///
    /// # Errors
    ///
    /// Fails when the platform cannot provide the context.
    pub fn acquire_context(self) -> Result<ContextReady<P, E>, InitError> {
        let context = self.platform.create_context(&self.surface)?;
        transition(Phase::SurfaceReady, Phase::ContextReady);
        Ok(ContextReady {
            platform: self.platform,
            engine: self.engine,
            policy: self.policy,
            resize_mode: self.resize_mode,
            surface: self.surface,
            context,
        })
    }
}

// =============================================================
// ContextReady
// =============================================================

/// Surface and context exist; the engine has not drawn anything.
///
/// There is no way to draw from here:
///
/// ```compile_fail
/// use render_bridge::lifecycle::ContextReady;
/// use render_bridge::platform::Platform;
/// use render_bridge::render::RenderEngine;
///
/// fn early<P: Platform, E: RenderEngine<Context = P::Context> + 'static>(ready: &ContextReady<P, E>) {
///     ready.render();
/// }
/// ```
pub struct ContextReady<P: Platform, E> {
    platform: P,
    engine: E,
    policy: RenderPolicy,
    resize_mode: ResizeMode,
    surface: P::Surface,
    context: P::Context,
}

impl<P, E> ContextReady<P, E>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
{
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::ContextReady
    }

    #[must_use]
    pub fn surface(&self) -> &P::Surface {
        &self.surface
    }

    /// Load both shader sources concurrently, then build the program.
    ///
    /// Suspends until both loads have completed.
    ///
    /// # Errors
    ///
    /// Returns the first load failure, or the engine's init failure.
    pub async fn load_shaders<L: ShaderLoader>(
        mut self,
        loader: &L,
        names: &ShaderNames,
    ) -> Result<ShadersReady<P, E>, InitError> {
        let sources = load_sources(loader, names).await?;
        self.engine.init(&self.context, &sources.vertex, &sources.fragment)?;
        transition(Phase::ContextReady, Phase::ShadersReady);
        Ok(ShadersReady { inner: self })
    }

    /// Start running without shader initialization.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Subscribe`] if the event listeners cannot be
    /// registered.
    pub fn run(self) -> Result<Running<P, E>, InitError> {
        self.start(Phase::ContextReady)
    }

    fn start(self, from: Phase) -> Result<Running<P, E>, InitError> {
        let Self { platform, engine, policy, resize_mode, surface, context } = self;
        let engine = Rc::new(RefCell::new(engine));
        let handlers = engine_handlers(&surface, &context, &engine, policy);
        let bindings = bind_handlers(&surface, &platform.viewport(), handlers, resize_mode)?;
        transition(from, Phase::Running);

        let running = Running { surface, context, engine, bindings, policy };
        running.render();
        Ok(running)
    }
}

// =============================================================
// ShadersReady
// =============================================================

/// Shader program built; ready to draw.
pub struct ShadersReady<P: Platform, E> {
    inner: ContextReady<P, E>,
}

impl<P, E> ShadersReady<P, E>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
{
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::ShadersReady
    }

    #[must_use]
    pub fn surface(&self) -> &P::Surface {
        &self.inner.surface
    }

    /// Bind the event streams and draw the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Subscribe`] if the event listeners cannot be
    /// registered.
    pub fn run(self) -> Result<Running<P, E>, InitError> {
        self.inner.start(Phase::ShadersReady)
    }
}

// =============================================================
// Running
// =============================================================

/// Events are bound and at least one frame has been drawn.
pub struct Running<P: Platform, E> {
    surface: P::Surface,
    context: P::Context,
    engine: Rc<RefCell<E>>,
    bindings: Bindings,
    policy: RenderPolicy,
}

impl<P, E> Running<P, E>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
{
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::Running
    }

    #[must_use]
    pub fn surface(&self) -> &P::Surface {
        &self.surface
    }

    #[must_use]
    pub fn context(&self) -> &P::Context {
        &self.context
    }

    #[must_use]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    #[must_use]
    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Draw a frame at the current surface size.
    ///
    /// Returns `false` if the engine is busy (called from inside an engine
    /// callback) and nothing was drawn.
    pub fn render(&self) -> bool {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            log::warn!("render: engine busy, frame skipped");
            return false;
        };
        engine.render(&self.context, Some(self.surface.size()));
        true
    }

    /// Run `f` with exclusive access to the engine.
    ///
    /// Returns `None` if the engine is already borrowed.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut E, &P::Context) -> R) -> Option<R> {
        let Ok(mut engine) = self.engine.try_borrow_mut() else {
            log::warn!("engine busy, access skipped");
            return None;
        };
        Some(f(&mut engine, &self.context))
    }

    /// Remove every listener and hand the surface and context back.
    pub fn shutdown(self) -> (P::Surface, P::Context) {
        self.bindings.unbind();
        log::debug!("lifecycle: running -> shut down");
        (self.surface, self.context)
    }

    /// Keep the listeners registered for the rest of the page and drop the
    /// handle.
    pub fn detach(self) {
        self.bindings.detach();
    }
}

/// Capabilities that forward events to the shared engine per `policy`.
fn engine_handlers<S, C, E>(surface: &S, context: &C, engine: &Rc<RefCell<E>>, policy: RenderPolicy) -> HandlerConfig
where
    S: Surface + Clone + 'static,
    C: Clone + 'static,
    E: RenderEngine<Context = C> + 'static,
{
    let on_move = {
        let surface = surface.clone();
        let context = context.clone();
        let engine = Rc::clone(engine);
        move |x: i32, y: i32, clicked: bool| {
            let Ok(mut engine) = engine.try_borrow_mut() else {
                log::warn!("input: engine busy, pointer sample dropped");
                return;
            };
            engine.mousemove(&context, x, y, clicked);
            if policy.render_on_input {
                engine.render(&context, Some(surface.size()));
            }
        }
    };
    let on_resize = {
        let context = context.clone();
        let engine = Rc::clone(engine);
        move |width: u32, height: u32| {
            let Ok(mut engine) = engine.try_borrow_mut() else {
                log::warn!("resize: engine busy, resize dropped");
                return;
            };
            engine.resize(&context, width, height);
            if policy.render_on_resize {
                engine.render(&context, Some(DimensionSample::new(width, height)));
            }
        }
    };
    HandlerConfig::new().with_mousemove(on_move).with_resize(on_resize)
}

// =============================================================
// Full sequence
// =============================================================

/// Drive the whole startup sequence from `config`.
///
/// # Errors
///
/// Returns the first [`InitError`] raised by any step.
pub async fn launch<P, E, L>(platform: P, engine: E, config: &BridgeConfig, loader: &L) -> Result<Running<P, E>, InitError>
where
    P: Platform,
    E: RenderEngine<Context = P::Context> + 'static,
    L: ShaderLoader,
{
    let container = config.container();
    let ready = RenderCoordinator::new(platform, engine, config.policy())
        .with_resize_mode(config.resize_mode())
        .acquire_surface(&container)?
        .acquire_context()?;

    let running = if config.init_shaders {
        let names = config.shader_names();
        ready.load_shaders(loader, &names).await?.run()?
    } else {
        ready.run()?
    };
    let size = running.surface().size();
    log::info!("render bridge running in {container} at {}x{}", size.width, size.height);
    Ok(running)
}
