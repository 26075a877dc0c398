//! Dense coordinate-to-entity index for cube lookups.

use bevy::prelude::*;

/// Maps every board coordinate to the cube entity spawned there, or `None`
/// for empty cells.
///
/// Allocated once at scene construction, sized exactly to the board's
/// bounding box, and filled only by the board-to-scene builder. Never
/// resized afterwards.
#[derive(Resource)]
pub struct CubeIndex {
    dims: UVec3,
    slots: Vec<Option<Entity>>,
}

impl CubeIndex {
    pub fn new(dims: UVec3) -> Self {
        Self {
            dims,
            slots: vec![None; (dims.x * dims.y * dims.z) as usize],
        }
    }

    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// O(1) lookup. `None` for empty cells and out-of-range coordinates.
    pub fn get(&self, coord: UVec3) -> Option<Entity> {
        self.slots[self.offset(coord)?]
    }

    pub(crate) fn set(&mut self, coord: UVec3, entity: Entity) {
        if let Some(offset) = self.offset(coord) {
            self.slots[offset] = Some(entity);
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every coordinate in the bounding box, in storage order.
    pub fn coords(&self) -> impl Iterator<Item = UVec3> + '_ {
        let UVec3 { x, y, z } = self.dims;
        (0..x).flat_map(move |i| {
            (0..y).flat_map(move |j| (0..z).map(move |k| UVec3::new(i, j, k)))
        })
    }

    fn offset(&self, coord: UVec3) -> Option<usize> {
        (coord.x < self.dims.x && coord.y < self.dims.y && coord.z < self.dims.z)
            .then(|| ((coord.x * self.dims.y + coord.y) * self.dims.z + coord.z) as usize)
    }
}
