//! Material palette for cubes, grid lines, and the enclosure.

use bevy::prelude::*;

/// Cube palette indexed by cell type. Entry 0 is the immovable variant.
pub const CUBE_COLORS: [Color; 6] = [
    Color::srgb(0.92, 0.92, 0.95), // immovable
    Color::srgb(0.85, 0.25, 0.25),
    Color::srgb(0.25, 0.65, 0.30),
    Color::srgb(0.25, 0.45, 0.85),
    Color::srgb(0.90, 0.75, 0.20),
    Color::srgb(0.60, 0.30, 0.80),
];

/// Boundary grid colors, one per board axis (i, j, k).
pub const GRID_COLORS: [Color; 3] = [
    Color::srgb(0.9, 0.4, 0.4),
    Color::srgb(0.4, 0.9, 0.4),
    Color::srgb(0.4, 0.5, 0.9),
];

const GRID_ALPHA: f32 = 0.5;

/// One material instance per cube, so fade passes on one cube never bleed
/// into another that shares its color.
pub fn cube_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    cube_type: u8,
) -> Handle<StandardMaterial> {
    let base_color = CUBE_COLORS[cube_type as usize];
    if cube_type == 0 {
        // Glossy finish sets the immovable cubes apart.
        materials.add(StandardMaterial {
            base_color,
            perceptual_roughness: 0.25,
            reflectance: 0.6,
            ..default()
        })
    } else {
        materials.add(StandardMaterial {
            base_color,
            perceptual_roughness: 0.9,
            reflectance: 0.1,
            ..default()
        })
    }
}

/// Translucent unlit line material for one board axis. Grid elements never
/// fade, so a shared handle per axis is fine.
pub fn grid_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    axis: usize,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: GRID_COLORS[axis].with_alpha(GRID_ALPHA),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
