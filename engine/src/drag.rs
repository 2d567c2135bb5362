//! Pointer drag tracking.
//!
//! A drag starts on the first pointer sample with the primary button held and
//! ends on the first sample without it. Each sample in between yields the
//! pixel offset from the previous one.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// The gesture being tracked between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Primary button held since the sample at `last_x`, `last_y`.
    Dragging { last_x: i32, last_y: i32 },
}

/// Pixel offset between two consecutive drag samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelDelta {
    pub dx: i32,
    pub dy: i32,
}

impl PixelDelta {
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Offset as a fraction of a `width` x `height` surface.
    ///
    /// Returns `None` for an empty surface.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normalized(self, width: u32, height: u32) -> Option<(f32, f32)> {
        if width == 0 || height == 0 {
            return None;
        }
        Some((self.dx as f32 / width as f32, self.dy as f32 / height as f32))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one pointer sample.
    ///
    /// Returns the offset from the previous sample while dragging. The
    /// sample that starts a drag yields a zero offset; a release yields `None`.
    pub fn update(&mut self, x: i32, y: i32, clicked: bool) -> Option<PixelDelta> {
        if !clicked {
            self.state = DragState::Idle;
            return None;
        }
        let delta = match self.state {
            DragState::Idle => PixelDelta::default(),
            DragState::Dragging { last_x, last_y } => PixelDelta {
                dx: x.saturating_sub(last_x),
                dy: y.saturating_sub(last_y),
            },
        };
        self.state = DragState::Dragging { last_x: x, last_y: y };
        Some(delta)
    }

    /// Forget any drag in progress.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
