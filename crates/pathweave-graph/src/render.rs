use crate::geometry::{PathProperties, compute_edge_path};
use crate::view::ViewState;
use pathweave_core::{Edge, Node, NodeId, NodeSize};
use std::fmt::Write as _;

/// One renderable connector: path data plus the conditional class tags the
/// host styles against. Styling itself (colors, stroke widths, animation
/// keyframes) lives entirely with the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePathElement {
    pub path_id: String,
    pub path_d: String,
    pub class_names: Vec<&'static str>,
}

impl EdgePathElement {
    pub fn from_properties(props: PathProperties) -> Self {
        let mut class_names = vec!["edge-path"];
        if props.is_animated {
            class_names.push("animated");
        }
        if props.is_alternate_path {
            class_names.push("alternate-path");
        }
        if props.path_highlighted {
            class_names.push("highlighted");
        }
        if props.is_tool_connection {
            class_names.push("tool-connection");
        }
        Self {
            path_id: props.path_id,
            path_d: props.path_d,
            class_names,
        }
    }

    /// Emit the element as a single SVG `<path>`.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            &mut out,
            r#"<path id="{}" class="{}" d="{}" fill="none"/>"#,
            self.path_id,
            self.class_names.join(" "),
            self.path_d
        );
        out
    }
}

/// Render one directed edge, or skip it when an endpoint is unresolved.
pub fn edge_element(
    source: &NodeId,
    target: &NodeId,
    nodes: &[Node],
    node_size: NodeSize,
    view: &ViewState,
) -> Option<EdgePathElement> {
    match compute_edge_path(source, target, nodes, node_size, view) {
        Some(props) => Some(EdgePathElement::from_properties(props)),
        None => {
            tracing::debug!(%source, %target, "skipping edge with unresolved endpoint");
            None
        }
    }
}

/// Render every connector of a graph.
///
/// Decision-style connectivity comes from each node's `connects` list;
/// lineage-style connectivity from the explicit edge list. A combined graph
/// supplies both. Unresolved references are skipped.
pub fn graph_edge_elements(
    nodes: &[Node],
    edges: &[Edge],
    node_size: NodeSize,
    view: &ViewState,
) -> Vec<EdgePathElement> {
    let mut elements = Vec::new();

    for node in nodes {
        for target in &node.connects {
            if let Some(element) = edge_element(&node.id, target, nodes, node_size, view) {
                elements.push(element);
            }
        }
    }

    for edge in edges {
        if let Some(element) = edge_element(&edge.source, &edge.target, nodes, node_size, view) {
            elements.push(element);
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathweave_core::{EdgeKind, NodeKind, Vec2};

    fn node(id: &str, kind: NodeKind, x: f32, y: f32) -> Node {
        Node::new(id, kind, Vec2::new(x, y))
    }

    fn size() -> NodeSize {
        NodeSize::new(100.0, 50.0)
    }

    #[test]
    fn svg_element_carries_id_classes_and_path_data() {
        let nodes = vec![
            node("a", NodeKind::Tool, 0.0, 0.0),
            node("b", NodeKind::Default, 300.0, 100.0),
        ];
        let mut view = ViewState::default();
        view.set_hovered(Some(NodeId::from("a")));
        view.set_animated("a-b", true);

        let element =
            edge_element(&NodeId::from("a"), &NodeId::from("b"), &nodes, size(), &view).unwrap();

        assert_eq!(
            element.class_names,
            vec!["edge-path", "animated", "highlighted", "tool-connection"]
        );
        assert_eq!(
            element.to_svg(),
            r#"<path id="a-b" class="edge-path animated highlighted tool-connection" d="M100 25 C180 25, 220 125, 300 125" fill="none"/>"#
        );
    }

    #[test]
    fn plain_edge_gets_only_the_base_class() {
        let nodes = vec![
            node("a", NodeKind::Default, 0.0, 0.0),
            node("b", NodeKind::Default, 300.0, 0.0),
        ];
        let element = edge_element(
            &NodeId::from("a"),
            &NodeId::from("b"),
            &nodes,
            size(),
            &ViewState::default(),
        )
        .unwrap();
        assert_eq!(element.class_names, vec!["edge-path"]);
    }

    #[test]
    fn renders_connects_lists_and_edge_lists_together() {
        let nodes = vec![
            node("d1", NodeKind::Tool, 0.0, 0.0)
                .with_connects(vec![NodeId::from("d2"), NodeId::from("d3")]),
            node("d2", NodeKind::Default, 200.0, 0.0),
            node("d3", NodeKind::Alternate, 200.0, 150.0),
            node("l1", NodeKind::DataSource, 0.0, 300.0),
            node("l2", NodeKind::Output, 200.0, 300.0),
        ];
        let edges = vec![Edge::new("l1", "l2", EdgeKind::Flow)];

        let elements = graph_edge_elements(&nodes, &edges, size(), &ViewState::default());

        let ids: Vec<&str> = elements.iter().map(|e| e.path_id.as_str()).collect();
        assert_eq!(ids, vec!["d1-d2", "d1-d3", "l1-l2"]);
    }

    #[test]
    fn unresolved_references_are_skipped_not_rendered() {
        let nodes = vec![
            node("d1", NodeKind::Default, 0.0, 0.0)
                .with_connects(vec![NodeId::from("missing"), NodeId::from("d2")]),
            node("d2", NodeKind::Default, 200.0, 0.0),
        ];
        let edges = vec![Edge::new("ghost", "d2", EdgeKind::Flow)];

        let elements = graph_edge_elements(&nodes, &edges, size(), &ViewState::default());

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].path_id, "d1-d2");
    }

    #[test]
    fn empty_graph_renders_nothing() {
        let elements = graph_edge_elements(&[], &[], size(), &ViewState::default());
        assert!(elements.is_empty());
    }
}
