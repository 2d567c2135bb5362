//! Pointer-move forwarding.
//!
//! Each pointer-move activity on the surface becomes exactly one synchronous
//! `mousemove(x, y, clicked)` call. Nothing is batched or coalesced.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::error::InitError;
use crate::handlers::MouseMoveFn;
use crate::input::PointerSample;
use crate::platform::Surface;
use crate::subscription::Subscription;

/// Subscribe `mousemove` to pointer activity on `surface`.
///
/// Returns `Ok(None)` without touching the surface when no capability is
/// given.
///
/// # Errors
///
/// Propagates [`InitError::Subscribe`] from the surface.
pub fn bind_input<S: Surface>(surface: &S, mousemove: Option<MouseMoveFn>) -> Result<Option<Subscription>, InitError> {
    let Some(mut mousemove) = mousemove else {
        log::debug!("input: no mousemove capability, pointer activity not subscribed");
        return Ok(None);
    };
    let subscription = surface.on_pointer_move(Box::new(move |activity| {
        let sample = PointerSample::from(activity);
        mousemove(sample.x, sample.y, sample.clicked);
    }))?;
    Ok(Some(subscription))
}
