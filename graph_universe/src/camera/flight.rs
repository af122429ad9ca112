//! Camera flight: eased flyover toward a clicked node.

use bevy::prelude::*;

use crate::camera::orbit::CameraRig;

/// Wall-clock flight window; duration holds across differing frame rates.
pub const FLIGHT_DURATION_SECS: f32 = 1.0;
/// How far short of the node the camera stops.
pub const APPROACH_DISTANCE: f32 = 25.0;

/// One in-progress flight: start and end of both the eye and the look-at
/// target, interpolated together on the ease curve.
#[derive(Clone, Copy, Debug)]
pub struct Flight {
    pub start_eye: Vec3,
    pub end_eye: Vec3,
    pub start_focus: Vec3,
    pub end_focus: Vec3,
    pub started_at: f32,
}

impl Flight {
    /// Flight from the current eye/focus toward a node position. The end eye
    /// pulls up `APPROACH_DISTANCE` short of the node along the approach
    /// direction.
    pub fn toward(target: Vec3, eye: Vec3, focus: Vec3, started_at: f32) -> Self {
        let dir = (target - eye).try_normalize().unwrap_or(Vec3::Z);
        Self {
            start_eye: eye,
            end_eye: target - dir * APPROACH_DISTANCE,
            start_focus: focus,
            end_focus: target,
            started_at,
        }
    }

    pub fn progress(&self, now: f32) -> f32 {
        ((now - self.started_at) / FLIGHT_DURATION_SECS).clamp(0.0, 1.0)
    }

    /// Eased (eye, focus) at normalized time `t`.
    pub fn sample(&self, t: f32) -> (Vec3, Vec3) {
        let s = ease_in_out(t);
        (
            self.start_eye.lerp(self.end_eye, s),
            self.start_focus.lerp(self.end_focus, s),
        )
    }
}

/// Single-slot flight state. A new click replaces the slot outright, so the
/// newest flight deterministically supersedes any in-progress one instead of
/// racing it for the camera.
#[derive(Resource, Default)]
pub struct ActiveFlight(pub Option<Flight>);

/// Symmetric quadratic ease: 2t² below the midpoint, mirrored above it.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

pub fn flight_plugin(app: &mut App) {
    app.init_resource::<ActiveFlight>()
        .init_resource::<CameraRig>()
        .add_systems(Update, flight_system);
}

/// Advances the active flight and writes the camera transform. On landing,
/// the orbit rig is re-seeded from the final eye/focus and the slot clears.
fn flight_system(
    time: Res<Time>,
    mut active: ResMut<ActiveFlight>,
    mut rig: ResMut<CameraRig>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Some(flight) = active.0 else {
        return;
    };
    let Ok(mut tf) = cameras.get_single_mut() else {
        return;
    };

    let t = flight.progress(time.elapsed_secs());
    let (eye, focus) = flight.sample(t);
    *tf = Transform::from_translation(eye).looking_at(focus, Vec3::Y);

    if t >= 1.0 {
        *rig = CameraRig::from_eye_focus(eye, focus);
        active.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_exact_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn ease_is_symmetric_about_the_midpoint() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let sum = ease_in_out(t) + ease_in_out(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5, "t={t}: {sum}");
        }
    }

    #[test]
    fn flight_interpolates_between_its_endpoints() {
        let eye = Vec3::new(100.0, 50.0, 100.0);
        let focus = Vec3::ZERO;
        let target = Vec3::new(0.0, 0.0, -200.0);
        let flight = Flight::toward(target, eye, focus, 0.0);

        let (p0, f0) = flight.sample(0.0);
        assert_eq!(p0, eye);
        assert_eq!(f0, focus);

        let (p1, f1) = flight.sample(1.0);
        assert_eq!(p1, flight.end_eye);
        assert_eq!(f1, target);
        assert!((p1.distance(target) - APPROACH_DISTANCE).abs() < 1e-3);

        // eased(0.5) == 0.5 exactly: the midpoint of the path.
        let (p_mid, f_mid) = flight.sample(0.5);
        assert!(p_mid.distance((eye + flight.end_eye) / 2.0) < 1e-3);
        assert!(f_mid.distance((focus + target) / 2.0) < 1e-3);
    }

    #[test]
    fn progress_is_bounded_by_the_flight_window() {
        let flight = Flight::toward(Vec3::X, Vec3::ZERO, Vec3::ZERO, 10.0);
        assert_eq!(flight.progress(9.0), 0.0);
        assert_eq!(flight.progress(10.5), 0.5);
        assert_eq!(flight.progress(12.0), 1.0);
    }

    #[test]
    fn superseding_flight_starts_from_the_sampled_state() {
        let first = Flight::toward(Vec3::new(300.0, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO, 0.0);
        let (eye_now, focus_now) = first.sample(first.progress(0.4));
        let second = Flight::toward(Vec3::new(0.0, 0.0, 300.0), eye_now, focus_now, 0.4);
        // No jump: the superseding flight begins exactly where the old one was.
        assert_eq!(second.sample(0.0), (eye_now, focus_now));
    }

    #[test]
    fn degenerate_approach_direction_falls_back() {
        let flight = Flight::toward(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 0.0);
        assert!((flight.end_eye.length() - APPROACH_DISTANCE).abs() < 1e-3);
    }
}
