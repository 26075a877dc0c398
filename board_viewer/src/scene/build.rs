//! Board-to-scene builder: enclosure, lights, camera, boundary grid, cubes.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::Face;

use crate::board::{Board, CubeIndex};
use crate::camera::OrbitCamera;
use crate::coords::{to_render_axes, to_world_position};
use crate::scene::cubes::{BoardAnchor, Cube, GridLine};
use crate::scene::materials::{cube_material, grid_material};
use crate::view::SeparationFactor;

/// Offset pushing grid elements just outside the cell volume, so the
/// wireframe never z-fights with cube faces.
const GRID_SPACE: f32 = 0.01;

const CUBE_SIZE: f32 = 1.0;
/// Gap between adjacent cube faces at separation 1.
const CUBE_SHRINK: f32 = 0.1;

const ENCLOSURE_SIZE: f32 = 200.0;

/// Fixed vantage point from the original viewer, in board space.
const CAMERA_HOME: Vec3 = Vec3::new(14.0, 20.0, 16.0);

#[derive(Clone, Copy)]
enum BoardAxis {
    I,
    J,
    K,
}

impl BoardAxis {
    const ALL: [BoardAxis; 3] = [BoardAxis::I, BoardAxis::J, BoardAxis::K];

    fn index(self) -> usize {
        self as usize
    }
}

/// Camera, lights, and the white enclosure box the board floats in.
pub fn setup_scene(
    mut commands: Commands,
    board: Res<Board>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let center = to_render_axes((board.dims().as_vec3() - Vec3::ONE) / 2.0);
    let camera_pos = to_render_axes(CAMERA_HOME);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_pos).looking_at(center, Vec3::Y),
        OrbitCamera::looking_from(camera_pos, center),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
    });
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(to_render_axes(Vec3::new(51.0, 49.0, 70.0))),
    ));

    // The enclosure is viewed from inside, so its front faces are culled.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(ENCLOSURE_SIZE, ENCLOSURE_SIZE, ENCLOSURE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            cull_mode: Some(Face::Front),
            ..default()
        })),
        Transform::from_translation(to_render_axes(Vec3::new(
            0.0,
            0.0,
            ENCLOSURE_SIZE / 2.0 - 5.0,
        ))),
    ));
}

/// Builds the boundary grid and one cube per occupied cell, registering
/// every cube in a freshly allocated [`CubeIndex`]. Runs once per board.
pub fn spawn_board(
    mut commands: Commands,
    board: Res<Board>,
    separation: Res<SeparationFactor>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let dims = board.dims();
    let mut index = CubeIndex::new(dims);
    let factor = separation.get();

    let tile_meshes = BoardAxis::ALL.map(|axis| meshes.add(grid_tile_mesh(axis)));
    let line_meshes = BoardAxis::ALL.map(|axis| meshes.add(axis_line_mesh(axis)));
    let grid_materials: [Handle<StandardMaterial>; 3] =
        std::array::from_fn(|axis| grid_material(&mut materials, axis));

    // One wireframe tile per boundary cell on each of the three floor planes.
    for coord in board.coords() {
        let UVec3 { x: i, y: j, z: k } = coord;
        let tiles = [
            (BoardAxis::I, i == 0, Vec3::new(-GRID_SPACE, j as f32, k as f32)),
            (BoardAxis::J, j == 0, Vec3::new(i as f32, -GRID_SPACE, k as f32)),
            (BoardAxis::K, k == 0, Vec3::new(i as f32, j as f32, -GRID_SPACE)),
        ];
        for (axis, on_plane, board_coord) in tiles {
            if on_plane {
                spawn_grid_element(
                    &mut commands,
                    tile_meshes[axis.index()].clone(),
                    grid_materials[axis.index()].clone(),
                    board_coord,
                    factor,
                );
            }
        }
    }

    // Axis indicator segments one cell past each extreme corner.
    let line_anchors = [
        Vec3::new(dims.x as f32, -GRID_SPACE, -GRID_SPACE),
        Vec3::new(-GRID_SPACE, dims.y as f32, -GRID_SPACE),
        Vec3::new(-GRID_SPACE, -GRID_SPACE, dims.z as f32),
    ];
    for (axis, board_coord) in BoardAxis::ALL.into_iter().zip(line_anchors) {
        spawn_grid_element(
            &mut commands,
            line_meshes[axis.index()].clone(),
            grid_materials[axis.index()].clone(),
            board_coord,
            factor,
        );
    }

    // Cubes, one per occupied cell, each with its own material instance.
    let side = CUBE_SIZE - CUBE_SHRINK;
    let cube_mesh = meshes.add(Cuboid::new(side, side, side));
    for coord in board.coords() {
        let Some(cube_type) = board.get(coord) else {
            continue;
        };
        let board_coord = coord.as_vec3();
        let entity = commands
            .spawn((
                Mesh3d(cube_mesh.clone()),
                MeshMaterial3d(cube_material(&mut materials, cube_type)),
                Transform::from_translation(to_world_position(board_coord, factor)),
                BoardAnchor { board_coord },
                Cube { coord, cube_type },
            ))
            .id();
        index.set(coord, entity);
    }

    info!(
        "board scene built: dims {:?}, {} cubes",
        dims,
        index.occupied_count()
    );
    commands.insert_resource(index);
}

fn spawn_grid_element(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    board_coord: Vec3,
    separation: f32,
) {
    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(to_world_position(board_coord, separation)),
        BoardAnchor { board_coord },
        GridLine,
    ));
}

/// Four edges of a unit cell face, flush with the face the axis points away
/// from. Vertices are authored in board space and reoriented once; mesh-local
/// geometry is never scaled by the separation factor.
fn grid_tile_mesh(axis: BoardAxis) -> Mesh {
    let h = CUBE_SIZE / 2.0;
    let corners = match axis {
        BoardAxis::I => [
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, h, h),
            Vec3::new(-h, -h, h),
        ],
        BoardAxis::J => [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, -h, h),
            Vec3::new(-h, -h, h),
        ],
        BoardAxis::K => [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
        ],
    };
    let edges = [
        corners[0], corners[1],
        corners[1], corners[2],
        corners[2], corners[3],
        corners[3], corners[0],
    ];
    line_mesh(&edges)
}

/// One cell-length segment along the given axis, starting at the cell's
/// lowest corner.
fn axis_line_mesh(axis: BoardAxis) -> Mesh {
    let h = CUBE_SIZE / 2.0;
    let start = Vec3::new(-h, -h, -h);
    let end = match axis {
        BoardAxis::I => Vec3::new(h, -h, -h),
        BoardAxis::J => Vec3::new(-h, h, -h),
        BoardAxis::K => Vec3::new(-h, -h, h),
    };
    line_mesh(&[start, end])
}

fn line_mesh(points: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| to_render_axes(*p).to_array()).collect();
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}
