//! Headless end-to-end tests: scene construction, separation, fade modes.

use bevy::prelude::*;
use board_viewer::prelude::*;

/// App with the board spawned and the view systems wired, but no renderer.
fn board_app(board: Board) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<StandardMaterial>>();
    app.insert_resource(board);
    app.add_plugins(board_view_plugin);
    app.add_systems(Startup, spawn_board);
    app.update();
    app
}

/// 3x3x3 board, every cell occupied with movable type 1.
fn full_board() -> Board {
    Board::new(UVec3::splat(3), vec![1; 27]).unwrap()
}

fn cube_material(app: &mut App, coord: UVec3) -> StandardMaterial {
    let world = app.world_mut();
    let mut query = world.query::<(&Cube, &MeshMaterial3d<StandardMaterial>)>();
    let handle = query
        .iter(world)
        .find(|(cube, _)| cube.coord == coord)
        .map(|(_, material)| material.0.clone())
        .expect("cube at coord");
    world
        .resource::<Assets<StandardMaterial>>()
        .get(&handle)
        .unwrap()
        .clone()
}

fn assert_faded(material: &StandardMaterial, opacity: f32) {
    assert!(matches!(material.alpha_mode, AlphaMode::Blend));
    assert_eq!(material.base_color.alpha(), opacity);
}

fn assert_opaque(material: &StandardMaterial) {
    assert!(matches!(material.alpha_mode, AlphaMode::Opaque));
    assert_eq!(material.base_color.alpha(), 1.0);
}

fn anchor_positions(app: &mut App) -> Vec<(Vec3, Vec3)> {
    let world = app.world_mut();
    let mut query = world.query::<(&BoardAnchor, &Transform)>();
    query
        .iter(world)
        .map(|(anchor, transform)| (anchor.board_coord, transform.translation))
        .collect()
}

#[test]
fn construction_spawns_one_cube_per_occupied_cell_and_the_boundary_grid() {
    let mut app = board_app(full_board());
    let world = app.world_mut();

    let cube_count = world.query::<&Cube>().iter(world).count();
    assert_eq!(cube_count, 27);

    // 9 tiles per floor plane plus the 3 axis indicator segments.
    let grid_count = world
        .query_filtered::<(), With<GridLine>>()
        .iter(world)
        .count();
    assert_eq!(grid_count, 30);

    assert_eq!(world.resource::<CubeIndex>().occupied_count(), 27);

    let mut cubes = world.query::<(&Cube, &Transform)>();
    let (_, transform) = cubes
        .iter(world)
        .find(|(cube, _)| cube.coord == UVec3::new(1, 2, 0))
        .unwrap();
    assert_eq!(
        transform.translation,
        to_world_position(Vec3::new(1.0, 2.0, 0.0), 1.0)
    );
}

#[test]
fn empty_cells_spawn_nothing_and_later_passes_skip_them() {
    let mut cells = vec![1i8; 27];
    cells[(1 * 3 + 1) * 3 + 1] = -1; // hollow out the center
    let board = Board::new(UVec3::splat(3), cells).unwrap();
    let mut app = board_app(board);

    {
        let world = app.world_mut();
        assert_eq!(world.query::<&Cube>().iter(world).count(), 26);
        assert_eq!(world.resource::<CubeIndex>().get(UVec3::new(1, 1, 1)), None);
    }

    // A full fade pass over the board must skip the hole silently.
    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::layers(1);
    app.update();
    assert_faded(
        &cube_material(&mut app, UVec3::new(0, 0, 0)),
        DEFAULT_FADE_OPACITY,
    );
}

#[test]
fn separation_repositions_every_tracked_object() {
    let mut app = board_app(full_board());
    app.world_mut()
        .resource_mut::<SeparationFactor>()
        .set(2.0)
        .unwrap();
    app.update();

    for (board_coord, translation) in anchor_positions(&mut app) {
        assert_eq!(translation, to_world_position(board_coord, 2.0));
    }
}

#[test]
fn invalid_separation_is_rejected_atomically() {
    let mut app = board_app(full_board());
    app.world_mut()
        .resource_mut::<SeparationFactor>()
        .set(1.5)
        .unwrap();
    app.update();
    let before = anchor_positions(&mut app);

    let err = app
        .world_mut()
        .resource_mut::<SeparationFactor>()
        .set(0.5)
        .unwrap_err();
    assert_eq!(err, ViewError::InvalidSeparation(0.5));
    app.update();

    assert_eq!(app.world().resource::<SeparationFactor>().get(), 1.5);
    assert_eq!(anchor_positions(&mut app), before);
}

#[test]
fn fade_layers_fades_the_shell_and_spares_the_interior() {
    let mut app = board_app(full_board());
    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::Layers {
        layers: 1,
        fade_immovable: true,
        opacity: 0.1,
    };
    app.update();

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                let coord = UVec3::new(i, j, k);
                let material = cube_material(&mut app, coord);
                if coord == UVec3::new(1, 1, 1) {
                    assert_opaque(&material);
                } else {
                    assert_faded(&material, 0.1);
                }
            }
        }
    }

    // Grid materials are never part of a fade pass.
    let world = app.world_mut();
    let mut grid = world.query_filtered::<&MeshMaterial3d<StandardMaterial>, With<GridLine>>();
    let handle = grid.iter(world).next().unwrap().0.clone();
    let material = world
        .resource::<Assets<StandardMaterial>>()
        .get(&handle)
        .unwrap();
    assert_eq!(material.base_color.alpha(), 0.5);
}

#[test]
fn fade_layers_exempts_immovable_cubes_when_asked() {
    let mut cells = vec![1i8; 27];
    cells[0] = 0; // (0, 0, 0) immovable
    let board = Board::new(UVec3::splat(3), cells).unwrap();
    let mut app = board_app(board);

    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::Layers {
        layers: 1,
        fade_immovable: false,
        opacity: 0.1,
    };
    app.update();

    // In the shell, but immovable and therefore spared.
    assert_opaque(&cube_material(&mut app, UVec3::new(0, 0, 0)));
    // Interior stays opaque as always.
    assert_opaque(&cube_material(&mut app, UVec3::new(1, 1, 1)));
    // Movable shell cubes fade.
    assert_faded(&cube_material(&mut app, UVec3::new(2, 2, 2)), 0.1);
}

// The highlighted cube is exempted by coordinate equality alone; the
// fade_immovable flag is accepted but has no effect in this mode. That
// mirrors the layers/others asymmetry of the original viewer.
#[test]
fn fade_others_spares_exactly_the_named_coordinate() {
    let mut cells = vec![1i8; 27];
    cells[(1 * 3 + 1) * 3 + 1] = 0; // the spotlit cube is immovable
    let board = Board::new(UVec3::splat(3), cells).unwrap();
    let mut app = board_app(board);

    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::Others {
        coord: UVec3::new(1, 1, 1),
        fade_immovable: false,
        opacity: 0.2,
    };
    app.update();

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                let coord = UVec3::new(i, j, k);
                let material = cube_material(&mut app, coord);
                if coord == UVec3::new(1, 1, 1) {
                    assert_opaque(&material);
                } else {
                    assert_faded(&material, 0.2);
                }
            }
        }
    }
}

#[test]
fn fade_none_clears_any_prior_mode_completely() {
    let mut app = board_app(full_board());
    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::layers(1);
    app.update();
    assert_faded(
        &cube_material(&mut app, UVec3::new(0, 0, 0)),
        DEFAULT_FADE_OPACITY,
    );

    *app.world_mut().resource_mut::<FadeMode>() = FadeMode::None;
    app.update();

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                assert_opaque(&cube_material(&mut app, UVec3::new(i, j, k)));
            }
        }
    }
}

#[test]
fn setup_scene_spawns_camera_and_lighting() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<StandardMaterial>>();
    app.insert_resource(Board::demo());
    app.add_systems(Startup, setup_scene);
    app.update();

    let world = app.world_mut();
    assert_eq!(world.query::<&Camera3d>().iter(world).count(), 1);
    assert_eq!(world.query::<&PointLight>().iter(world).count(), 1);
    assert!(world.get_resource::<AmbientLight>().is_some());
}
