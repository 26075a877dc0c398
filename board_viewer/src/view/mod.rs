//! View operations: separation (explode view) and fade policies.

mod controls;
mod fade;
mod separation;

use bevy::prelude::*;
use thiserror::Error;

pub use controls::view_controls_plugin;
pub use fade::{FadeMode, DEFAULT_FADE_IMMOVABLE, DEFAULT_FADE_OPACITY};
pub use separation::SeparationFactor;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("separation factor must be >= 1, got {0}")]
    InvalidSeparation(f32),
}

/// Wires the view resources and the systems that apply them to the scene.
pub fn board_view_plugin(app: &mut App) {
    app.init_resource::<SeparationFactor>()
        .init_resource::<FadeMode>()
        .add_systems(Update, (separation::apply_separation, fade::apply_fade));
}
