//! Renderer trait and default implementation.

mod spheres;

use bevy::prelude::*;

use crate::data::GraphNode;

pub use spheres::{SphereRenderer, SphereSettings};

/// Seam for swapping node marker geometry. The default renderer spawns
/// spheres; embedders can provide their own via the builder.
pub trait GraphRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    /// Spawn the marker entity for one node at its layout position. The
    /// returned entity must carry a `NodeMarker` component.
    fn spawn_node(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        node: &GraphNode,
        position: Vec3,
        group_index: usize,
    ) -> Entity;
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn GraphRenderer>);

impl RendererResource {
    pub fn new(renderer: impl GraphRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
