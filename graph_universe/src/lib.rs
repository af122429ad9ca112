//! Graph universe — interactive 3D visualization of a node/edge graph.
//!
//! Library root: data, layout, SDK builder, and config modules.

mod camera;
pub mod config;
pub mod data;
pub mod layout;
pub mod render;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use data::http::HttpFetcher;
pub use data::{FetchConfig, GraphEdge, GraphEvent, GraphFetcher, GraphNode, GraphSnapshot};
pub use scene::NodeMarker;
