//! Relation lines drawn between node markers using Bevy Gizmos.

use bevy::prelude::*;

use crate::scene::materials;
use crate::scene::NodeMarker;

/// Edge segments resolved against the current snapshot's markers. Rebuilt
/// wholesale with the rest of the scene; edges whose endpoints did not
/// resolve never enter the list.
#[derive(Resource, Default)]
pub struct EdgeRegistry {
    pub segments: Vec<(Entity, Entity)>,
}

/// Draws every resolved edge between its markers' current positions, so
/// lines stay attached while markers bob.
pub fn draw_edges_system(
    mut gizmos: Gizmos,
    registry: Res<EdgeRegistry>,
    markers: Query<&GlobalTransform, With<NodeMarker>>,
) {
    let color = materials::edge_color();
    for &(a, b) in &registry.segments {
        let (Ok(ta), Ok(tb)) = (markers.get(a), markers.get(b)) else {
            continue;
        };
        gizmos.line(ta.translation(), tb.translation(), color);
    }
}
