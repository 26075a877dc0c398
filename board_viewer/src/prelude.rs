//! Minimal prelude for SDK consumers.

pub use crate::board::{load_board, Board, BoardError, CellType, CubeIndex};
pub use crate::config::board_from_env;
pub use crate::coords::{to_render_axes, to_world_position};
pub use crate::scene::{setup_scene, spawn_board, BoardAnchor, Cube, GridLine};
pub use crate::sdk::BoardViewerBuilder;
pub use crate::view::{
    board_view_plugin, FadeMode, SeparationFactor, ViewError, DEFAULT_FADE_IMMOVABLE,
    DEFAULT_FADE_OPACITY,
};
