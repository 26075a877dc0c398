//! HUD overlay: board stats, view state, FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::board::Board;
use crate::scene::Cube;
use crate::view::{FadeMode, SeparationFactor};

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    board: Res<Board>,
    separation: Res<SeparationFactor>,
    mode: Res<FadeMode>,
    cubes: Query<&Cube>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let dims = board.dims();

    egui::Window::new("Board Viewer")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(format!("Board {}x{}x{}", dims.x, dims.y, dims.z))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("Cubes      {}", cubes.iter().count()));
            ui.label(format!("Separation {:.2}", separation.get()));
            ui.label(format!("Fade       {}", describe_mode(&mode)));
            ui.add_space(4.0);

            ui.separator();
            ui.label("[ ] separation   1-3 fade layers   C spotlight   N reset");
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn describe_mode(mode: &FadeMode) -> String {
    match mode {
        FadeMode::None => "none".to_string(),
        FadeMode::Layers {
            layers, opacity, ..
        } => format!("outer {layers} layer(s) @ {opacity:.2}"),
        FadeMode::Others { coord, opacity, .. } => {
            format!("all but ({}, {}, {}) @ {opacity:.2}", coord.x, coord.y, coord.z)
        }
    }
}
