//! Deterministic group layout: group centers on a ring, members jittered
//! around their center with seeded noise.

mod noise;

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::data::GraphNode;

pub use noise::seeded_noise;

/// Sentinel group for nodes with an absent or blank group label.
pub const DEFAULT_GROUP: &str = "ungrouped";

const MIN_RING_RADIUS: f64 = 120.0;
const RING_RADIUS_SCALE: f64 = 60.0;
const JITTER_SPREAD: f64 = 45.0;
const JITTER_SEED_X: i64 = 13;
const JITTER_SEED_Y: i64 = 71;
const JITTER_SEED_Z: i64 = 137;

/// Positions computed for one scene rebuild. Recomputed fully each time,
/// never cached or diffed across snapshots.
pub struct LayoutResult {
    pub ring_radius: f32,
    /// Group labels in first-appearance order of the node sequence.
    pub group_order: Vec<String>,
    pub group_centers: HashMap<String, Vec3>,
    pub positions: HashMap<i64, Vec3>,
}

impl LayoutResult {
    /// Index of a group in layout order, used for stable per-group colors.
    pub fn group_index(&self, group: &str) -> usize {
        self.group_order
            .iter()
            .position(|g| g == group)
            .unwrap_or(0)
    }
}

/// Trimmed group label, falling back to [`DEFAULT_GROUP`].
pub fn group_key(node: &GraphNode) -> &str {
    match node.group.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_GROUP,
        Some(group) => group,
    }
}

/// Shared ring radius for `k` distinct groups, floored so a single group
/// still has working layout scale.
pub fn ring_radius(group_count: usize) -> f64 {
    MIN_RING_RADIUS.max(RING_RADIUS_SCALE * (group_count as f64).sqrt())
}

/// Computes group centers and node positions for a node sequence.
///
/// Pure function of the input: identical ids, groups, and ordering yield
/// bit-identical positions. Duplicate ids are not deduplicated; they land on
/// the same jittered spot.
pub fn compute_layout(nodes: &[GraphNode]) -> LayoutResult {
    let mut group_order: Vec<String> = Vec::new();
    for node in nodes {
        let key = group_key(node);
        if !group_order.iter().any(|g| g == key) {
            group_order.push(key.to_string());
        }
    }

    let k = group_order.len();
    let radius = ring_radius(k);

    let mut group_centers = HashMap::with_capacity(k);
    for (i, group) in group_order.iter().enumerate() {
        // Ring in the XZ plane with a vertical wave separating neighbors.
        let angle = (i as f64 / k as f64) * TAU;
        let center = Vec3::new(
            (angle.cos() * radius) as f32,
            ((2.0 * angle).sin() * radius / 4.0) as f32,
            (angle.sin() * radius) as f32,
        );
        group_centers.insert(group.clone(), center);
    }

    let mut positions = HashMap::with_capacity(nodes.len());
    for node in nodes {
        let center = group_centers[group_key(node)];
        positions.insert(node.id, center + jitter_offset(node.id));
    }

    LayoutResult {
        ring_radius: radius as f32,
        group_order,
        group_centers,
        positions,
    }
}

/// Three independent jitter axes derived from the node id.
fn jitter_offset(id: i64) -> Vec3 {
    Vec3::new(
        jitter(id + JITTER_SEED_X),
        jitter(id + JITTER_SEED_Y),
        jitter(id + JITTER_SEED_Z),
    )
}

fn jitter(seed: i64) -> f32 {
    ((seeded_noise(seed) - 0.5) * JITTER_SPREAD) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, group: Option<&str>) -> GraphNode {
        GraphNode {
            id,
            name: format!("node-{id}"),
            group: group.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let nodes = vec![
            node(1, Some("core")),
            node(2, Some("core")),
            node(3, Some("infra")),
            node(4, None),
        ];
        let first = compute_layout(&nodes);
        let second = compute_layout(&nodes);
        for n in &nodes {
            assert_eq!(first.positions[&n.id], second.positions[&n.id]);
        }
        assert_eq!(first.group_order, second.group_order);
    }

    #[test]
    fn blank_groups_fall_into_the_default_group() {
        assert_eq!(group_key(&node(1, None)), DEFAULT_GROUP);
        assert_eq!(group_key(&node(2, Some(""))), DEFAULT_GROUP);
        assert_eq!(group_key(&node(3, Some("   "))), DEFAULT_GROUP);
        assert_eq!(group_key(&node(4, Some(" core "))), "core");
    }

    #[test]
    fn single_ungrouped_node_sits_near_the_ring_floor() {
        let layout = compute_layout(&[node(7, None)]);
        let distance = layout.positions[&7].length();
        // Center (120, 0, 0) plus at most half the spread per axis: the node
        // must sit near the floor radius, not collapse to the origin.
        assert!(
            (distance - 120.0).abs() < 45.0,
            "distance {distance} strayed from the ring floor"
        );
        assert_eq!(layout.ring_radius, 120.0);
    }

    #[test]
    fn single_group_center_lands_on_the_positive_x_axis() {
        let layout = compute_layout(&[node(1, Some("only"))]);
        let center = layout.group_centers["only"];
        assert!((center.x - 120.0).abs() < 1e-3);
        assert!(center.y.abs() < 1e-3);
        assert!(center.z.abs() < 1e-3);
    }

    #[test]
    fn group_centers_lie_on_the_shared_ring() {
        let nodes: Vec<GraphNode> = (0..6)
            .map(|i| node(i, Some(&format!("group-{i}"))))
            .collect();
        let layout = compute_layout(&nodes);
        let radius = ring_radius(6) as f32;
        for group in &layout.group_order {
            let center = layout.group_centers[group];
            let xz = (center.x * center.x + center.z * center.z).sqrt();
            assert!((xz - radius).abs() < 1e-2, "{group}: {xz} vs {radius}");
        }
    }

    #[test]
    fn ring_radius_never_shrinks_as_groups_grow() {
        assert_eq!(ring_radius(1), 120.0);
        assert_eq!(ring_radius(4), 120.0);
        assert!((ring_radius(9) - 180.0).abs() < 1e-9);
        for k in 1..=32 {
            assert!(ring_radius(k + 1) >= ring_radius(k));
        }
    }

    #[test]
    fn members_scatter_around_their_group_center() {
        let nodes: Vec<GraphNode> = (0..20).map(|i| node(i, Some("core"))).collect();
        let layout = compute_layout(&nodes);
        let center = layout.group_centers["core"];
        for n in &nodes {
            let offset = layout.positions[&n.id] - center;
            assert!(offset.x.abs() <= 22.5);
            assert!(offset.y.abs() <= 22.5);
            assert!(offset.z.abs() <= 22.5);
        }
        // Jitter must actually separate members, not stack them.
        let distinct: std::collections::HashSet<String> = nodes
            .iter()
            .map(|n| format!("{:?}", layout.positions[&n.id]))
            .collect();
        assert_eq!(distinct.len(), nodes.len());
    }
}
