use pathweave_core::{Edge, EdgeKind, GraphMode, Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Default vertical gap between the decision graph and the lineage graph in
/// the combined view.
pub const DEFAULT_VERTICAL_SPACING: f32 = 200.0;

/// Fixed horizontal shift applied to lineage nodes in the combined view.
pub const COMBINED_X_OFFSET: f32 = 70.0;

/// A single renderable node/edge set produced from the two input graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Merges a decision graph and a lineage graph for the three display modes.
#[derive(Debug, Clone, Copy)]
pub struct GraphCombiner {
    /// Vertical gap between the two stacked graphs in combined mode.
    pub vertical_spacing: f32,
}

impl Default for GraphCombiner {
    fn default() -> Self {
        Self {
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

impl GraphCombiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(vertical_spacing: f32) -> Self {
        Self { vertical_spacing }
    }

    /// Produce the node/edge set for `mode`.
    ///
    /// Decision mode passes the decision nodes through with no edge list (the
    /// decision graph encodes connectivity in each node's `connects`).
    /// Lineage mode passes both lists through unchanged. Combined mode stacks
    /// the lineage graph beneath the decision graph and synthesizes
    /// cross-graph anchor edges.
    pub fn combine(
        &self,
        decision_nodes: &[Node],
        lineage_nodes: &[Node],
        lineage_edges: &[Edge],
        mode: GraphMode,
    ) -> CombinedGraph {
        match mode {
            GraphMode::Decision => CombinedGraph {
                nodes: decision_nodes.to_vec(),
                edges: Vec::new(),
            },
            GraphMode::Lineage => CombinedGraph {
                nodes: lineage_nodes.to_vec(),
                edges: lineage_edges.to_vec(),
            },
            GraphMode::Combined => self.combine_stacked(decision_nodes, lineage_nodes, lineage_edges),
        }
    }

    fn combine_stacked(
        &self,
        decision_nodes: &[Node],
        lineage_nodes: &[Node],
        lineage_edges: &[Edge],
    ) -> CombinedGraph {
        let mut nodes = decision_nodes.to_vec();

        let repositioned = lineage_nodes.iter().map(|lineage| {
            let mut node = lineage.clone();
            node.position.x += COMBINED_X_OFFSET;
            node.position.y += self.vertical_spacing;
            node.is_combined_view = true;
            node
        });

        let mut edges: Vec<Edge> = lineage_edges
            .iter()
            .map(|lineage| {
                let mut edge = lineage.clone();
                edge.is_combined_view = true;
                edge
            })
            .collect();

        edges.extend(self.cross_graph_edges(decision_nodes, lineage_nodes));
        nodes.extend(repositioned);

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "combined decision and lineage graphs"
        );

        CombinedGraph { nodes, edges }
    }

    /// Synthesize one visual anchor edge per qualifying decision node.
    ///
    /// Tool nodes link to the first data_source/transformation lineage node
    /// in list order; alternate nodes link to the first output node. First
    /// match wins: one anchor per node, not a complete bipartite connection.
    fn cross_graph_edges(&self, decision_nodes: &[Node], lineage_nodes: &[Node]) -> Vec<Edge> {
        let first_stage = lineage_nodes
            .iter()
            .find(|n| matches!(n.kind, NodeKind::DataSource | NodeKind::Transformation));
        let first_output = lineage_nodes.iter().find(|n| n.kind == NodeKind::Output);

        let mut edges = Vec::new();
        for node in decision_nodes {
            match node.kind {
                NodeKind::Tool => {
                    if let Some(anchor) = first_stage {
                        edges.push(Edge::new(
                            node.id.clone(),
                            anchor.id.clone(),
                            EdgeKind::CrossConnection,
                        ));
                    }
                }
                NodeKind::Alternate => {
                    if let Some(anchor) = first_output {
                        edges.push(Edge::new(
                            node.id.clone(),
                            anchor.id.clone(),
                            EdgeKind::AlternateConnection,
                        ));
                    }
                }
                _ => {}
            }
        }
        edges
    }
}
