//! Components carried by the spawned board objects.

use bevy::prelude::*;

use crate::board::CellType;

/// Board-space coordinate tag on every positioned object (cubes and grid
/// elements; fractional for grid elements).
///
/// The world position is never authoritative: it is always re-derivable as
/// `to_world_position(board_coord, separation)`.
#[derive(Component, Debug)]
pub struct BoardAnchor {
    pub board_coord: Vec3,
}

/// Marker + data for cube entities, one per occupied cell.
#[derive(Component, Debug)]
pub struct Cube {
    pub coord: UVec3,
    pub cube_type: CellType,
}

impl Cube {
    /// Type 0 is the immovable variant; everything above it is movable.
    pub fn is_movable(&self) -> bool {
        self.cube_type > 0
    }
}

/// Marker for boundary grid elements: wireframe tiles and axis indicator
/// lines. Never affected by fading.
#[derive(Component)]
pub struct GridLine;
