//! Separation controller: uniform spacing between cells.

use bevy::prelude::*;

use crate::coords::to_world_position;
use crate::scene::BoardAnchor;
use crate::view::ViewError;

/// Uniform scalar applied to every render-space position. Always >= 1;
/// 1 means cubes sit flush against each other.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SeparationFactor(f32);

impl Default for SeparationFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl SeparationFactor {
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Stores a new factor. A factor below 1 is rejected before any state
    /// changes, leaving the previous factor and all positions intact.
    pub fn set(&mut self, factor: f32) -> Result<(), ViewError> {
        if factor < 1.0 {
            return Err(ViewError::InvalidSeparation(factor));
        }
        self.0 = factor;
        Ok(())
    }
}

/// Re-derives the position of every tracked object (grid elements and cubes
/// alike) from its stored board coordinate whenever the factor changes.
/// Never creates or destroys objects.
pub fn apply_separation(
    separation: Res<SeparationFactor>,
    mut anchors: Query<(&BoardAnchor, &mut Transform)>,
) {
    if !separation.is_changed() {
        return;
    }
    for (anchor, mut transform) in &mut anchors {
        transform.translation = to_world_position(anchor.board_coord, separation.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_factors_below_one_without_mutating() {
        let mut separation = SeparationFactor::default();
        separation.set(2.5).unwrap();

        let err = separation.set(0.5).unwrap_err();
        assert_eq!(err, ViewError::InvalidSeparation(0.5));
        assert_eq!(separation.get(), 2.5);
    }

    #[test]
    fn one_is_a_valid_factor() {
        let mut separation = SeparationFactor::default();
        assert!(separation.set(1.0).is_ok());
        assert_eq!(separation.get(), 1.0);
    }
}
