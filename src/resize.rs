//! Viewport resize tracking.
//!
//! Resize is a window-level signal. On each activity the container's client
//! size is floored to whole pixels, written to the surface, and only then
//! passed to the `resize` capability, so the capability always observes the
//! post-resize surface.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::InitError;
use crate::handlers::ResizeFn;
use crate::input::DimensionSample;
use crate::platform::{ResizeListener, Surface, Viewport};
use crate::subscription::Subscription;

/// How resize activity maps onto recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    /// One recompute per activity.
    #[default]
    Immediate,
    /// At most one recompute per animation frame.
    CoalescePerFrame,
}

/// Subscribe `resize` to viewport resize activity for `surface`.
///
/// Returns `Ok(None)` when no capability is given or the surface has no
/// container at bind time.
///
/// # Errors
///
/// Propagates [`InitError::Subscribe`] from the viewport.
pub fn bind_resize<S, V>(
    surface: &S,
    viewport: &V,
    resize: Option<ResizeFn>,
    mode: ResizeMode,
) -> Result<Option<Subscription>, InitError>
where
    S: Surface + Clone + 'static,
    V: Viewport + Clone + 'static,
{
    let Some(mut resize) = resize else {
        log::debug!("resize: no resize capability, viewport activity not subscribed");
        return Ok(None);
    };
    if !surface.has_container() {
        log::debug!("resize: surface has no container, viewport activity not subscribed");
        return Ok(None);
    }

    let surface = surface.clone();
    let subscription = match mode {
        ResizeMode::Immediate => viewport.on_resize(Box::new(move || {
            apply_resize(&surface, &mut *resize);
        }))?,
        ResizeMode::CoalescePerFrame => {
            let alive = Rc::new(Cell::new(true));
            let listener = coalescing_listener(surface, viewport.clone(), resize, Rc::clone(&alive));
            let inner = viewport.on_resize(listener)?;
            Subscription::new(move || {
                alive.set(false);
                inner.unregister();
            })
        }
    };
    Ok(Some(subscription))
}

/// Recompute the surface size from its container and notify `resize`.
///
/// Returns the applied sample, or `None` if the container has gone away.
pub fn apply_resize<S: Surface>(surface: &S, resize: &mut dyn FnMut(u32, u32)) -> Option<DimensionSample> {
    let Some((client_width, client_height)) = surface.container_client_size() else {
        log::debug!("resize: container detached, activity skipped");
        return None;
    };
    let sample = DimensionSample::from_client_size(client_width, client_height);
    surface.set_size(sample);
    resize(sample.width, sample.height);
    Some(sample)
}

fn coalescing_listener<S, V>(surface: S, viewport: V, resize: ResizeFn, alive: Rc<Cell<bool>>) -> ResizeListener
where
    S: Surface + Clone + 'static,
    V: Viewport + 'static,
{
    let resize = Rc::new(RefCell::new(resize));
    let pending = Rc::new(Cell::new(false));
    Box::new(move || {
        if pending.get() {
            return;
        }
        pending.set(true);

        let frame = {
            let surface = surface.clone();
            let resize = Rc::clone(&resize);
            let pending = Rc::clone(&pending);
            let alive = Rc::clone(&alive);
            move || {
                pending.set(false);
                if alive.get() {
                    run_shared(&surface, &resize);
                }
            }
        };
        if let Err(err) = viewport.request_frame(Box::new(frame)) {
            log::debug!("resize: {err}, recomputing immediately");
            pending.set(false);
            run_shared(&surface, &resize);
        }
    })
}

fn run_shared<S: Surface>(surface: &S, resize: &RefCell<ResizeFn>) {
    match resize.try_borrow_mut() {
        Ok(mut resize) => {
            apply_resize(surface, &mut **resize);
        }
        Err(_) => log::warn!("resize: capability re-entered, activity dropped"),
    }
}
