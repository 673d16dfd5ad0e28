use crate::view::ViewState;
use pathweave_core::{Node, NodeId, NodeKind, NodeSize, Vec2};
use std::fmt::Write as _;

/// Lower bound for the horizontal control-point offset.
///
/// Keeps the curve readable when nodes sit close together: below this the
/// connector collapses into a nearly straight line.
pub const MIN_CONTROL_OFFSET: f32 = 80.0;

/// Upper bound for the horizontal control-point offset.
///
/// Prevents control points from scaling unbounded with edge length; without a
/// cap, long edges bow far outside the viewport.
pub const MAX_CONTROL_OFFSET: f32 = 150.0;

/// A cubic bezier curve segment defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl CubicBezier {
    /// Sample the curve at parameter t [0, 1]
    pub fn sample(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = self.start.x * mt3
            + 3.0 * self.control1.x * mt2 * t
            + 3.0 * self.control2.x * mt * t2
            + self.end.x * t3;
        let y = self.start.y * mt3
            + 3.0 * self.control1.y * mt2 * t
            + 3.0 * self.control2.y * mt * t2
            + self.end.y * t3;

        Vec2::new(x, y)
    }

    /// Compute the minimum distance from a point to this bezier curve.
    ///
    /// Uses uniform sampling along the curve to find the closest point.
    /// The `num_samples` parameter controls accuracy (higher = more precise
    /// but slower, typically 20-50).
    pub fn point_distance(&self, point: Vec2, num_samples: usize) -> f32 {
        let mut min_dist_sq = f32::INFINITY;
        let samples = num_samples.max(2);

        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let curve_point = self.sample(t);
            let dx = curve_point.x - point.x;
            let dy = curve_point.y - point.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
            }
        }

        min_dist_sq.sqrt()
    }

    /// Serialize as a single-command SVG path description:
    /// `M{start} C{control1}, {control2}, {end}`.
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            &mut out,
            "M{} {} C{} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        );
        out
    }
}

/// Derived render state for a single connector, recomputed fresh per render
/// pass from the current hover/selection/animation inputs. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PathProperties {
    /// SVG path description for the connector curve.
    pub path_d: String,
    /// Stable `"{source}-{target}"` key for externally tracked animation state.
    pub path_id: String,
    pub is_animated: bool,
    pub is_alternate_path: bool,
    pub path_highlighted: bool,
    pub is_tool_connection: bool,
}

/// Horizontal control-point offset for a connector between two x positions.
///
/// Proportional to the horizontal distance between the node edges, floored at
/// [`MIN_CONTROL_OFFSET`] and capped at [`MAX_CONTROL_OFFSET`].
pub fn control_point_offset(start_x: f32, end_x: f32) -> f32 {
    ((end_x - start_x).abs() / 3.0).clamp(MIN_CONTROL_OFFSET, MAX_CONTROL_OFFSET)
}

/// Build the connector curve between two node boxes.
///
/// The curve leaves the source box at the midpoint of its right edge and
/// enters the target box at the midpoint of its left edge, with both control
/// points offset horizontally so the curve stays flat near each node and bows
/// smoothly in between.
pub fn connector_curve(source_pos: Vec2, target_pos: Vec2, node_size: NodeSize) -> CubicBezier {
    let start = Vec2::new(
        source_pos.x + node_size.width,
        source_pos.y + node_size.height / 2.0,
    );
    let end = Vec2::new(target_pos.x, target_pos.y + node_size.height / 2.0);

    let offset = control_point_offset(start.x, end.x);

    CubicBezier {
        start,
        control1: Vec2::new(start.x + offset, start.y),
        control2: Vec2::new(end.x - offset, end.y),
        end,
    }
}

/// Compute the full set of path properties for one directed edge.
///
/// Resolves `source`/`target` against `nodes`; returns `None` when either id
/// is absent so the caller simply skips rendering that edge. This is the
/// defensive contract for stale edge lists, not an error condition.
pub fn compute_edge_path(
    source: &NodeId,
    target: &NodeId,
    nodes: &[Node],
    node_size: NodeSize,
    view: &ViewState,
) -> Option<PathProperties> {
    let source_node = nodes.iter().find(|n| &n.id == source)?;
    let target_node = nodes.iter().find(|n| &n.id == target)?;

    let curve = connector_curve(source_node.position, target_node.position, node_size);
    let path_id = format!("{source}-{target}");

    Some(PathProperties {
        path_d: curve.to_path_data(),
        is_animated: view.is_animated(&path_id),
        is_alternate_path: target_node.kind == NodeKind::Alternate,
        path_highlighted: view.touches(source) || view.touches(target),
        is_tool_connection: source_node.kind == NodeKind::Tool
            || target_node.kind == NodeKind::Tool,
        path_id,
    })
}

/// Pulse affordance for a node: tool nodes draw attention until focused.
pub fn node_pulse_class(is_tool_node: bool, is_selected: bool) -> &'static str {
    if is_tool_node && !is_selected {
        "pulse"
    } else {
        ""
    }
}
