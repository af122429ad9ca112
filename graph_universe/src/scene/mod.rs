pub(crate) mod edges;
pub(crate) mod graph;
pub(crate) mod labels;
pub(crate) mod materials;
pub(crate) mod starfield;

pub use edges::{draw_edges_system, EdgeRegistry};
pub use graph::{idle_bob_system, ingest_graph, setup_scene, GraphRegistry, NodeMarker};
pub use labels::{
    billboard_labels_system, label_distance_cull_system, label_follow_system, NodeLabel,
};
pub use starfield::starfield_plugin;
