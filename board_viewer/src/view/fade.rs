//! Fade engine: three mutually exclusive visibility policies over the cubes.

use bevy::prelude::*;

use crate::board::CubeIndex;
use crate::scene::Cube;

pub const DEFAULT_FADE_OPACITY: f32 = 0.1;
pub const DEFAULT_FADE_IMMOVABLE: bool = true;

/// Active fade policy. A single enum keeps the three modes mutually
/// exclusive; switching modes leaves no residue because every variant is a
/// full pass over all cubes. Grid elements are never touched.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum FadeMode {
    /// Every cube fully opaque.
    #[default]
    None,
    /// Fade the outer shell of the given thickness. Immovable cubes in the
    /// shell are exempt unless `fade_immovable` is set.
    Layers {
        layers: u32,
        fade_immovable: bool,
        opacity: f32,
    },
    /// Fade everything except the single cube at `coord`.
    Others {
        coord: UVec3,
        fade_immovable: bool,
        opacity: f32,
    },
}

impl FadeMode {
    pub fn layers(layers: u32) -> Self {
        Self::Layers {
            layers,
            fade_immovable: DEFAULT_FADE_IMMOVABLE,
            opacity: DEFAULT_FADE_OPACITY,
        }
    }

    pub fn others(coord: UVec3) -> Self {
        Self::Others {
            coord,
            fade_immovable: DEFAULT_FADE_IMMOVABLE,
            opacity: DEFAULT_FADE_OPACITY,
        }
    }
}

/// Whether `coord` lies within `layers` cells of any face of the box.
fn in_shell(coord: UVec3, dims: UVec3, layers: u32) -> bool {
    coord.x < layers
        || coord.y < layers
        || coord.z < layers
        || coord.x >= dims.x.saturating_sub(layers)
        || coord.y >= dims.y.saturating_sub(layers)
        || coord.z >= dims.z.saturating_sub(layers)
}

/// The transparency flag and the opacity value always move as a pair, so a
/// cube can never render transparent-but-fully-opaque.
fn set_faded(material: &mut StandardMaterial, opacity: f32) {
    material.alpha_mode = AlphaMode::Blend;
    material.base_color.set_alpha(opacity);
}

fn set_opaque(material: &mut StandardMaterial) {
    material.alpha_mode = AlphaMode::Opaque;
    material.base_color.set_alpha(1.0);
}

/// Applies the active policy in one synchronous pass whenever it changes.
/// Empty index slots are expected steady state and skipped silently.
pub fn apply_fade(
    mode: Res<FadeMode>,
    index: Option<Res<CubeIndex>>,
    cubes: Query<(&Cube, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !mode.is_changed() {
        return;
    }
    let Some(index) = index else {
        return;
    };

    match *mode {
        FadeMode::None => {
            for (_, handle) in &cubes {
                if let Some(material) = materials.get_mut(&handle.0) {
                    set_opaque(material);
                }
            }
        }
        FadeMode::Layers {
            layers,
            fade_immovable,
            opacity,
        } => {
            let dims = index.dims();
            for coord in index.coords() {
                let Some(entity) = index.get(coord) else {
                    continue;
                };
                let Ok((cube, handle)) = cubes.get(entity) else {
                    continue;
                };
                let Some(material) = materials.get_mut(&handle.0) else {
                    continue;
                };
                if in_shell(coord, dims, layers) && (fade_immovable || cube.is_movable()) {
                    set_faded(material, opacity);
                } else {
                    set_opaque(material);
                }
            }
        }
        // fade_immovable is carried for symmetry with Layers but the
        // exemption here is decided by coordinate equality alone.
        FadeMode::Others { coord, opacity, .. } => {
            for (cube, handle) in &cubes {
                let Some(material) = materials.get_mut(&handle.0) else {
                    continue;
                };
                if cube.coord == coord {
                    set_opaque(material);
                } else {
                    set_faded(material, opacity);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: UVec3 = UVec3::new(3, 3, 3);

    #[test]
    fn shell_of_one_excludes_only_the_center() {
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    let coord = UVec3::new(i, j, k);
                    let expected = coord != UVec3::new(1, 1, 1);
                    assert_eq!(in_shell(coord, DIMS, 1), expected, "{coord:?}");
                }
            }
        }
    }

    #[test]
    fn shell_of_zero_is_empty() {
        assert!(!in_shell(UVec3::new(0, 0, 0), DIMS, 0));
        assert!(!in_shell(UVec3::new(2, 2, 2), DIMS, 0));
    }

    #[test]
    fn oversized_shell_swallows_the_whole_board() {
        assert!(in_shell(UVec3::new(1, 1, 1), DIMS, 5));
    }

    #[test]
    fn fade_helpers_keep_flag_and_opacity_coupled() {
        let mut material = StandardMaterial::default();

        set_faded(&mut material, 0.1);
        assert!(matches!(material.alpha_mode, AlphaMode::Blend));
        assert_eq!(material.base_color.alpha(), 0.1);

        set_opaque(&mut material);
        assert!(matches!(material.alpha_mode, AlphaMode::Opaque));
        assert_eq!(material.base_color.alpha(), 1.0);
    }

    #[test]
    fn constructors_fill_in_the_documented_defaults() {
        assert_eq!(
            FadeMode::layers(2),
            FadeMode::Layers {
                layers: 2,
                fade_immovable: true,
                opacity: 0.1
            }
        );
        assert_eq!(
            FadeMode::others(UVec3::ONE),
            FadeMode::Others {
                coord: UVec3::ONE,
                fade_immovable: true,
                opacity: 0.1
            }
        );
    }
}
