use crate::geometry::{CubicBezier, connector_curve};
use pathweave_core::{Edge, Node, NodeId, NodeSize, Vec2};
use std::collections::HashMap;

/// Distance-based hit testing against rendered connector curves.
///
/// The hosting view rebuilds the regions whenever the node set changes, then
/// resolves pointer positions to path ids to drive its hover state.
#[derive(Debug, Clone, Default)]
pub struct EdgeHitTester {
    /// (path id, curve) per rendered connector.
    regions: Vec<(String, CubicBezier)>,
    /// Tolerance in coordinate units for a pointer to count as on a curve.
    tolerance: f32,
    /// Number of samples along each bezier for distance computation.
    samples: usize,
}

impl EdgeHitTester {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            tolerance: 8.0,
            samples: 48,
        }
    }

    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            ..Self::new()
        }
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Rebuild hit regions from the current node/edge set.
    ///
    /// Mirrors the renderer's edge enumeration: `connects` lists plus the
    /// explicit edge list, skipping unresolved references.
    pub fn update(&mut self, nodes: &[Node], edges: &[Edge], node_size: NodeSize) {
        self.regions.clear();

        let by_id: HashMap<&NodeId, &Node> = nodes.iter().map(|n| (&n.id, n)).collect();
        let mut push = |source: &NodeId, target: &NodeId| {
            if let (Some(s), Some(t)) = (by_id.get(source), by_id.get(target)) {
                self.regions.push((
                    format!("{source}-{target}"),
                    connector_curve(s.position, t.position, node_size),
                ));
            }
        };

        for node in nodes {
            for target in &node.connects {
                push(&node.id, target);
            }
        }
        for edge in edges {
            push(&edge.source, &edge.target);
        }
    }

    /// The path id of the closest curve within tolerance, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;
        for (path_id, curve) in &self.regions {
            let dist = curve.point_distance(point, self.samples);
            if dist <= self.tolerance && best.is_none_or(|(_, d)| dist < d) {
                best = Some((path_id, dist));
            }
        }
        best.map(|(path_id, _)| path_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathweave_core::{EdgeKind, NodeKind};

    fn node(id: &str, x: f32, y: f32) -> Node {
        Node::new(id, NodeKind::Default, Vec2::new(x, y))
    }

    fn size() -> NodeSize {
        NodeSize::new(100.0, 50.0)
    }

    #[test]
    fn point_on_curve_resolves_to_its_path_id() {
        let nodes = vec![node("a", 0.0, 0.0), node("b", 300.0, 0.0)];
        let edges = vec![Edge::new("a", "b", EdgeKind::Flow)];

        let mut tester = EdgeHitTester::new();
        tester.update(&nodes, &edges, size());

        // The connector runs level at y = 25 from x = 100 to x = 300.
        assert_eq!(tester.hit_test(Vec2::new(200.0, 25.0)), Some("a-b"));
        assert_eq!(tester.hit_test(Vec2::new(200.0, 400.0)), None);
    }

    #[test]
    fn closest_curve_wins_when_several_are_within_tolerance() {
        let nodes = vec![
            node("a", 0.0, 0.0),
            node("b", 300.0, 0.0),
            node("c", 0.0, 10.0),
            node("d", 300.0, 10.0),
        ];
        let edges = vec![
            Edge::new("a", "b", EdgeKind::Flow),
            Edge::new("c", "d", EdgeKind::Flow),
        ];

        let mut tester = EdgeHitTester::with_tolerance(20.0);
        tester.update(&nodes, &edges, size());

        // Level curves at y = 25 and y = 35; a pointer at y = 27 is inside
        // tolerance for both but closer to the first.
        assert_eq!(tester.hit_test(Vec2::new(200.0, 27.0)), Some("a-b"));
        assert_eq!(tester.hit_test(Vec2::new(200.0, 34.0)), Some("c-d"));
    }

    #[test]
    fn update_drops_unresolved_and_stale_regions() {
        let nodes = vec![node("a", 0.0, 0.0).with_connects(vec![NodeId::from("gone")])];

        let mut tester = EdgeHitTester::new();
        tester.update(&nodes, &[], size());
        assert_eq!(tester.hit_test(Vec2::new(100.0, 25.0)), None);

        let connected = vec![
            node("a", 0.0, 0.0).with_connects(vec![NodeId::from("b")]),
            node("b", 300.0, 0.0),
        ];
        tester.update(&connected, &[], size());
        assert_eq!(tester.hit_test(Vec2::new(200.0, 25.0)), Some("a-b"));

        tester.update(&[], &[], size());
        assert_eq!(tester.hit_test(Vec2::new(200.0, 25.0)), None);
    }
}
