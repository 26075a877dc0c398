//! Cube board viewer — 3D visualization of a logical cube board.
//!
//! Occupied cells become tagged cube entities, the bounding box's floor
//! planes become wireframe grids, and the view operations (separation and
//! fading) mutate the spawned objects in place.

mod camera;
pub mod board;
pub mod config;
pub mod coords;
pub mod scene;
mod ui;
pub mod view;

pub mod prelude;
pub mod sdk;

pub use board::{load_board, Board, BoardError, CubeIndex};
pub use view::{FadeMode, SeparationFactor, ViewError};
