//! Background star shell with a slow idle drift.

use bevy::prelude::*;

use crate::layout::seeded_noise;

const STAR_COUNT: usize = 600;
const SHELL_RADIUS: f64 = 1600.0;
const DRIFT_RATE: f32 = 0.004;

/// Marker for the starfield root; stars are its children.
#[derive(Component)]
pub struct Starfield;

pub fn starfield_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_starfield)
        .add_systems(Update, drift_starfield_system);
}

/// Stars sit on a thick spherical shell far outside the layout ring.
/// Placement derives from seeded noise, so the sky is identical every run.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.4));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.88, 0.95),
        unlit: true,
        ..default()
    });

    commands
        .spawn((Starfield, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for i in 0..STAR_COUNT {
                let seed = i as i64 * 7;
                let u = seeded_noise(seed + 1);
                let v = seeded_noise(seed + 2);
                let w = seeded_noise(seed + 3);

                let theta = u * std::f64::consts::TAU;
                let phi = (2.0 * v - 1.0).acos();
                let radius = SHELL_RADIUS * (0.6 + 0.4 * w);

                let position = Vec3::new(
                    (radius * phi.sin() * theta.cos()) as f32,
                    (radius * phi.cos()) as f32,
                    (radius * phi.sin() * theta.sin()) as f32,
                );

                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(position),
                ));
            }
        });
}

fn drift_starfield_system(time: Res<Time>, mut roots: Query<&mut Transform, With<Starfield>>) {
    for mut tf in &mut roots {
        tf.rotate_y(DRIFT_RATE * time.delta_secs());
    }
}
