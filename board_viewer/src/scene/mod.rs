pub(crate) mod build;
pub(crate) mod cubes;
pub(crate) mod materials;

pub use build::{setup_scene, spawn_board};
pub use cubes::{BoardAnchor, Cube, GridLine};
