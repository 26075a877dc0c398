//! OrbitCamera component and system: drag to orbit, wheel to zoom.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.1;
const MIN_DISTANCE: f32 = 4.0;
const MAX_DISTANCE: f32 = 100.0;
const PITCH_LIMIT: f32 = 1.54;

/// Spherical-coordinate camera state around a fixed focus point.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
}

impl OrbitCamera {
    /// Derives the orbit state that places the camera at `position` looking
    /// at `focus`.
    pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            focus,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length()).asin(),
        }
    }

    fn position(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.focus
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag: Vec2 = if buttons.pressed(MouseButton::Left) {
        motion.read().map(|ev| ev.delta).sum()
    } else {
        motion.clear();
        Vec2::ZERO
    };
    let scroll: f32 = wheel.read().map(|ev| ev.y).sum();

    if drag == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        orbit.yaw -= drag.x * ROTATE_SENSITIVITY;
        orbit.pitch =
            (orbit.pitch + drag.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        orbit.radius =
            (orbit.radius * (1.0 - scroll * ZOOM_SENSITIVITY)).clamp(MIN_DISTANCE, MAX_DISTANCE);

        let focus = orbit.focus;
        transform.translation = orbit.position();
        transform.look_at(focus, Vec3::Y);
    }
}
