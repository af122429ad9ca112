//! Orbit camera: drag rotate, right-drag pan, wheel zoom around a focus.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::camera::flight::ActiveFlight;

const ROTATE_SENSITIVITY: f32 = 0.005;
const PAN_RATE: f32 = 0.0015;
const ZOOM_RATE: f32 = 0.1;
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 2500.0;
// Just short of the poles; an exactly vertical view breaks the pan basis.
const PITCH_LIMIT: f32 = 1.54;

/// Explicit camera state shared by the orbit controls and the flight
/// controller. The camera transform is always derived from this rig (or from
/// the active flight, which re-seeds it on completion).
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraRig {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.35,
            distance: 400.0,
        }
    }
}

impl CameraRig {
    pub fn eye(&self) -> Vec3 {
        self.focus
            + Vec3::new(
                self.distance * self.pitch.cos() * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * self.pitch.cos() * self.yaw.cos(),
            )
    }

    /// Re-seed the rig from an eye/focus pair so orbiting resumes from
    /// wherever a flight left the camera.
    pub fn from_eye_focus(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.init_resource::<CameraRig>()
        .init_resource::<ActiveFlight>()
        .add_systems(Update, (orbit_input_system, apply_camera_rig));
}

fn orbit_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut rig: ResMut<CameraRig>,
    active: Res<ActiveFlight>,
) {
    let mut delta = Vec2::ZERO;
    for ev in motion.read() {
        delta += ev.delta;
    }
    let mut scroll = 0.0;
    for ev in wheel.read() {
        scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
    }

    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    if active.0.is_some() {
        // The flight owns the camera until it lands.
        return;
    }

    if mouse.pressed(MouseButton::Left) && delta != Vec2::ZERO {
        rig.yaw -= delta.x * ROTATE_SENSITIVITY;
        rig.pitch = (rig.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    if mouse.pressed(MouseButton::Right) && delta != Vec2::ZERO {
        let forward = (rig.focus - rig.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let scale = rig.distance * PAN_RATE;
        rig.focus += (-delta.x * right + delta.y * up) * scale;
    }

    if scroll != 0.0 {
        rig.distance = (rig.distance * (1.0 - scroll * ZOOM_RATE)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Writes the rig to the camera transform whenever no flight is active.
fn apply_camera_rig(
    rig: Res<CameraRig>,
    active: Res<ActiveFlight>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if active.0.is_some() {
        return;
    }
    let Ok(mut tf) = cameras.get_single_mut() else {
        return;
    };
    *tf = Transform::from_translation(rig.eye()).looking_at(rig.focus, Vec3::Y);
}
