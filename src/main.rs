//! Cuboard — cube board viewer. Runs the board_viewer app.

use bevy::prelude::*;
use board_viewer::sdk::BoardViewerBuilder;

fn main() {
    let _ = dotenvy::dotenv();

    BoardViewerBuilder::new()
        .window_title("Cuboard")
        .clear_color(Color::srgb(0.05, 0.05, 0.08))
        .build()
        .run();
}
