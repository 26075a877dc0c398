//! Keyboard driver for the view operations.

use bevy::prelude::*;

use crate::board::Board;
use crate::view::{FadeMode, SeparationFactor};

const SEPARATION_STEP: f32 = 0.25;
const SEPARATION_MAX: f32 = 4.0;

pub fn view_controls_plugin(app: &mut App) {
    app.add_systems(Update, view_controls_system);
}

/// `[` / `]` step the separation factor, `1`–`3` fade that many outer
/// layers, `C` spotlights the center cube, `N` resets.
fn view_controls_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut separation: ResMut<SeparationFactor>,
    mut mode: ResMut<FadeMode>,
    board: Res<Board>,
) {
    if keys.just_pressed(KeyCode::BracketRight) {
        let next = (separation.get() + SEPARATION_STEP).min(SEPARATION_MAX);
        if let Err(err) = separation.set(next) {
            warn!("{err}");
        }
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        let next = (separation.get() - SEPARATION_STEP).max(1.0);
        if let Err(err) = separation.set(next) {
            warn!("{err}");
        }
    }

    for (key, layers) in [
        (KeyCode::Digit1, 1),
        (KeyCode::Digit2, 2),
        (KeyCode::Digit3, 3),
    ] {
        if keys.just_pressed(key) {
            *mode = FadeMode::layers(layers);
        }
    }
    if keys.just_pressed(KeyCode::KeyC) {
        *mode = FadeMode::others(board.dims() / 2);
    }
    if keys.just_pressed(KeyCode::KeyN) {
        *mode = FadeMode::None;
    }
}
