//! Scene synchronization: ingest_graph system, marker registry, idle motion.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::data::{GraphChannel, GraphEvent, GraphSnapshot};
use crate::layout::{self, compute_layout};
use crate::render::RendererResource;
use crate::scene::edges::EdgeRegistry;
use crate::scene::labels::{spawn_node_label, NodeLabel};
use crate::ui::HudState;

/// Marker + data for node entities. `home` is the layout position the idle
/// bob oscillates around; hit tests resolve clicks back to these fields.
#[derive(Component)]
pub struct NodeMarker {
    pub id: i64,
    pub name: String,
    pub group: String,
    pub description: Option<String>,
    pub home: Vec3,
}

/// Maps node ids to marker entities for the current snapshot. Rebuilt
/// wholesale with the scene; never carried across snapshots.
#[derive(Resource, Default)]
pub struct GraphRegistry {
    pub markers: HashMap<i64, Entity>,
}

pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(GraphRegistry::default());
    commands.insert_resource(EdgeRegistry::default());
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(265., 137., 265.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(300., 500., 200.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });
}

/// Drains the fetcher channel. Failures update the HUD notice and leave the
/// scene untouched; of the snapshots drained this frame, the last one wins
/// and replaces the scene wholesale.
#[allow(clippy::too_many_arguments)]
pub fn ingest_graph(
    mut commands: Commands,
    channel: Res<GraphChannel>,
    renderer: Res<RendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hud_state: ResMut<HudState>,
    mut registry: ResMut<GraphRegistry>,
    mut edges: ResMut<EdgeRegistry>,
    markers: Query<Entity, With<NodeMarker>>,
    labels: Query<Entity, With<NodeLabel>>,
) {
    let mut latest: Option<GraphSnapshot> = None;
    while let Ok(event) = channel.0.try_recv() {
        match event {
            GraphEvent::Snapshot(snapshot) => latest = Some(snapshot),
            GraphEvent::Failed(message) => hud_state.record_failure(message),
        }
    }

    let Some(snapshot) = latest else {
        return;
    };

    // Discard the previous representation entirely; no object reuse.
    for entity in &markers {
        commands.entity(entity).despawn_recursive();
    }
    for entity in &labels {
        commands.entity(entity).despawn();
    }
    registry.markers.clear();
    edges.segments.clear();

    let layout = compute_layout(&snapshot.nodes);

    for node in &snapshot.nodes {
        let position = layout.positions[&node.id];
        let group_index = layout.group_index(layout::group_key(node));
        let entity = renderer.0.spawn_node(
            &mut commands,
            &mut meshes,
            &mut materials,
            node,
            position,
            group_index,
        );
        spawn_node_label(&mut commands, entity, &node.name, position);
        registry.markers.insert(node.id, entity);
    }

    // Resolve edges against this snapshot's markers; dangling references are
    // dropped silently (counted for the HUD, never an error).
    let mut dropped = 0usize;
    for edge in &snapshot.edges {
        match (registry.markers.get(&edge.a), registry.markers.get(&edge.b)) {
            (Some(&a), Some(&b)) => edges.segments.push((a, b)),
            _ => dropped += 1,
        }
    }

    hud_state.record_refresh(
        snapshot.nodes.len(),
        edges.segments.len(),
        layout.group_order.len(),
        dropped,
    );
}

const BOB_AMPLITUDE: f32 = 1.2;
const BOB_RATE: f32 = 0.6;

/// Gentle vertical oscillation around each marker's home position, phase
/// keyed by node id so the universe shimmers instead of breathing in sync.
pub fn idle_bob_system(time: Res<Time>, mut markers: Query<(&NodeMarker, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (marker, mut tf) in &mut markers {
        let phase = marker.id as f32 * 0.37;
        tf.translation.y = marker.home.y + (t * BOB_RATE + phase).sin() * BOB_AMPLITUDE;
    }
}
