//! Minimal prelude for SDK consumers.

pub use crate::config::{fixture_path, graph_endpoint, ConfigError};
pub use crate::data::{FetchConfig, GraphEdge, GraphEvent, GraphFetcher, GraphNode, GraphSnapshot};
pub use crate::layout::{compute_layout, seeded_noise, LayoutResult};
pub use crate::render::{GraphRenderer, SphereRenderer};
pub use crate::scene::NodeMarker;
pub use crate::sdk::UniverseBuilder;
