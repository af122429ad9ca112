//! Floating name labels above each node marker.

use bevy::prelude::*;

use crate::scene::NodeMarker;

/// Label entity tied to the marker it names.
#[derive(Component)]
pub struct NodeLabel {
    pub owner: Entity,
}

const LABEL_OFFSET_Y: f32 = 7.0;
const CULL_DISTANCE: f32 = 420.0;

/// Spawns a `Text2d` label above a marker.
pub fn spawn_node_label(commands: &mut Commands, owner: Entity, name: &str, position: Vec3) {
    commands.spawn((
        NodeLabel { owner },
        Text2d::new(name.to_string()),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::srgba(0.85, 0.92, 1.0, 0.9)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(position + Vec3::Y * LABEL_OFFSET_Y).with_scale(Vec3::splat(0.08)),
    ));
}

/// Keeps every label above its marker's current position, so labels track
/// the idle bob.
pub fn label_follow_system(
    markers: Query<&Transform, With<NodeMarker>>,
    mut labels: Query<(&NodeLabel, &mut Transform), Without<NodeMarker>>,
) {
    for (label, mut tf) in &mut labels {
        if let Ok(owner_tf) = markers.get(label.owner) {
            tf.translation = owner_tf.translation + Vec3::Y * LABEL_OFFSET_Y;
        }
    }
}

/// Rotates every `NodeLabel` to face the camera each frame.
pub fn billboard_labels_system(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut labels: Query<&mut Transform, (With<NodeLabel>, Without<Camera3d>, Without<NodeMarker>)>,
) {
    let Ok(cam_tf) = camera_query.get_single() else {
        return;
    };
    let cam_pos = cam_tf.translation;
    for mut tf in &mut labels {
        tf.look_at(cam_pos, Vec3::Y);
    }
}

/// Hides labels beyond `CULL_DISTANCE` from the camera.
#[allow(clippy::type_complexity)]
pub fn label_distance_cull_system(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut labels: Query<(&Transform, &mut Visibility), (With<NodeLabel>, Without<Camera3d>)>,
) {
    let Ok(cam_tf) = camera_query.get_single() else {
        return;
    };
    let cam_pos = cam_tf.translation;
    for (tf, mut vis) in &mut labels {
        *vis = if tf.translation.distance(cam_pos) > CULL_DISTANCE {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}
