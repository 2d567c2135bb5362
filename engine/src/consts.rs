//! Shared numeric constants for the engine crate.

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in radians.
pub const FOVY: f32 = 0.78;

/// Near clip plane distance.
pub const NEAR_CLIP: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_CLIP: f32 = 100.0;

/// World units the camera travels when the pointer crosses the full surface.
pub const PAN_SCALE: f32 = 2.0;

// ── Frame ───────────────────────────────────────────────────────

/// RGBA clear color.
pub const CLEAR_COLOR: [f32; 4] = [0.5, 0.75, 0.75, 1.0];

/// Name of the view-projection uniform in the user's vertex shader.
pub const VIEW_PROJ_UNIFORM: &str = "view_proj";

/// Attribute bound to location 0 before linking.
pub const POSITION_ATTRIBUTE: &str = "position";

// ── Mesh ────────────────────────────────────────────────────────

/// Quad corners (x, y, z) one unit in front of the camera.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, -1.0, //
    1.0, -1.0, -1.0, //
    1.0, 1.0, -1.0, //
    -1.0, 1.0, -1.0,
];

/// Two triangles over [`QUAD_VERTICES`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 2, 3, 1];

/// Element count passed to `drawElements`.
pub const QUAD_INDEX_COUNT: i32 = 6;
