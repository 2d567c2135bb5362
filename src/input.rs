//! Input model: button flags, raw pointer activity, and normalized samples.
//!
//! `PointerActivity` is what the platform delivers for one pointer-move;
//! `PointerSample` is what the `mousemove` capability receives.
//! `DimensionSample` is the floored pixel size produced on every resize.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Pressed mouse buttons as reported by `MouseEvent.buttons`.
///
/// Each set bit is a currently pressed button. Only [`ButtonFlags::PRIMARY`]
/// matters here; other bits are carried but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonFlags(pub u16);

impl ButtonFlags {
    /// Left mouse button (or single-finger contact).
    pub const PRIMARY: u16 = 1;

    /// Whether every bit of `flag` is set.
    #[must_use]
    pub fn contains(self, flag: u16) -> bool {
        self.0 & flag == flag
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn primary(self) -> bool {
        self.contains(Self::PRIMARY)
    }
}

/// Decode a raw `buttons` bitmask into "primary button pressed".
#[must_use]
pub fn primary_button_pressed(buttons: u16) -> bool {
    ButtonFlags(buttons).primary()
}

/// One pointer-move occurrence as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerActivity {
    /// Horizontal position relative to the screen.
    pub screen_x: i32,
    /// Vertical position relative to the screen.
    pub screen_y: i32,
    /// Raw `buttons` bitmask.
    pub buttons: u16,
}

/// Normalized pointer sample handed to the `mousemove` capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub clicked: bool,
}

impl From<PointerActivity> for PointerSample {
    fn from(activity: PointerActivity) -> Self {
        Self {
            x: activity.screen_x,
            y: activity.screen_y,
            clicked: primary_button_pressed(activity.buttons),
        }
    }
}

/// Integer pixel dimensions of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionSample {
    pub width: u32,
    pub height: u32,
}

impl DimensionSample {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Floor a container's client size to whole pixels.
    ///
    /// Negative and NaN sizes collapse to zero, so the result never exceeds
    /// the reported size and is never negative.
    #[must_use]
    pub fn from_client_size(client_width: f64, client_height: f64) -> Self {
        Self { width: floor_px(client_width), height: floor_px(client_height) }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_px(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX for oversized values.
    value.floor() as u32
}
