//! Board-space to render-space coordinate mapping.
//!
//! Board space is the logical grid: axes (i, j, k), integer-indexed, origin at
//! a corner. Render space is what the camera sees. The two differ by a fixed
//! reorientation: the first axis is negated and the other two are swapped.

use bevy::prelude::*;

/// Reorients a board-space vector into render space: `(-x, z, y)`.
///
/// Pure and self-inverse: applying it twice returns the input.
pub fn to_render_axes(v: Vec3) -> Vec3 {
    Vec3::new(-v.x, v.z, v.y)
}

/// Converts a board coordinate to a world position, applying the separation
/// factor as a uniform scale.
///
/// Every positioned object goes through this function, both at spawn time and
/// on every re-placement, so initial and updated positions can never diverge.
pub fn to_world_position(board_coord: Vec3, separation: f32) -> Vec3 {
    to_render_axes(board_coord) * separation
}
