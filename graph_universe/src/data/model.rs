// Wire-format graph types as served by the endpoint.
// Transport concerns stay in http.rs; this is the decoded shape.

use serde::{Deserialize, Serialize};

/// A single node in a graph snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// An undirected relation between two node ids. References to ids missing
/// from the same snapshot are dropped at render time, not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub a: i64,
    pub b: i64,
}

/// One full graph snapshot. Replaced wholesale on every successful fetch;
/// never merged with the previous one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// What the fetcher thread hands to the ECS. Failures travel the same
/// channel so the UI can surface them without shared state.
#[derive(Clone, Debug)]
pub enum GraphEvent {
    Snapshot(GraphSnapshot),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_the_endpoint_shape() {
        let json = r#"{
            "nodes": [
                {"id": 1, "name": "auth", "group": "core", "description": "login flow"},
                {"id": 2, "name": "billing", "group": ""}
            ],
            "edges": [{"a": 1, "b": 2}],
            "company_id": 3,
            "ts": 1754400000
        }"#;
        let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes[0].description.as_deref(), Some("login flow"));
        assert_eq!(snapshot.nodes[1].group.as_deref(), Some(""));
        assert!(snapshot.nodes[1].description.is_none());
        assert_eq!(snapshot.edges, vec![GraphEdge { a: 1, b: 2 }]);
    }

    #[test]
    fn snapshot_tolerates_missing_collections() {
        let snapshot: GraphSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.edges.is_empty());
    }
}
