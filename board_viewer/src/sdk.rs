//! SDK entry points and builder for composing the board viewer app.

use bevy::prelude::*;

use crate::board::Board;
use crate::camera::orbit_camera_plugin;
use crate::config;
use crate::scene::{setup_scene, spawn_board};
use crate::ui::hud_plugin;
use crate::view::{board_view_plugin, view_controls_plugin};

/// Builder for constructing a board viewer app with customizable plugins.
pub struct BoardViewerBuilder {
    board: Option<Board>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_hud: bool,
    enable_controls: bool,
}

impl Default for BoardViewerBuilder {
    fn default() -> Self {
        Self {
            board: None,
            window_title: "Cuboard".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.05, 0.05, 0.08),
            enable_orbit_camera: true,
            enable_hud: true,
            enable_controls: true,
        }
    }
}

impl BoardViewerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit board instead of resolving one from the environment.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_controls(mut self) -> Self {
        self.enable_controls = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let board = self.board.unwrap_or_else(config::board_from_env);

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(board)
        .add_plugins(board_view_plugin)
        .add_systems(Startup, (setup_scene, spawn_board));

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_controls {
            app.add_plugins(view_controls_plugin);
        }

        app
    }
}
