pub mod combine;
pub mod geometry;
pub mod hit;
pub mod render;
pub mod view;

pub use combine::{COMBINED_X_OFFSET, CombinedGraph, DEFAULT_VERTICAL_SPACING, GraphCombiner};
pub use geometry::{
    CubicBezier, MAX_CONTROL_OFFSET, MIN_CONTROL_OFFSET, PathProperties, compute_edge_path,
    connector_curve, control_point_offset, node_pulse_class,
};
pub use hit::EdgeHitTester;
pub use render::{EdgePathElement, edge_element, graph_edge_elements};
pub use view::ViewState;
