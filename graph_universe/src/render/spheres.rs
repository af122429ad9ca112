use bevy::prelude::*;

use crate::data::GraphNode;
use crate::layout;
use crate::render::GraphRenderer;
use crate::scene::{materials, NodeMarker};

#[derive(Clone, Debug)]
pub struct SphereSettings {
    pub radius: f32,
}

impl Default for SphereSettings {
    fn default() -> Self {
        Self { radius: 4.0 }
    }
}

/// Default marker renderer: one sphere per node, colored by group.
#[derive(Default)]
pub struct SphereRenderer {
    pub settings: SphereSettings,
}

impl GraphRenderer for SphereRenderer {
    fn spawn_node(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials_res: &mut ResMut<Assets<StandardMaterial>>,
        node: &GraphNode,
        position: Vec3,
        group_index: usize,
    ) -> Entity {
        let material = materials::node_material(materials_res, group_index);
        commands
            .spawn((
                NodeMarker {
                    id: node.id,
                    name: node.name.clone(),
                    group: layout::group_key(node).to_string(),
                    description: node.description.clone(),
                    home: position,
                },
                Mesh3d(meshes.add(Sphere::new(self.settings.radius))),
                MeshMaterial3d(material),
                Transform::from_translation(position),
            ))
            .id()
    }
}
