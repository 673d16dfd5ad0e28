use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod tool;

pub use tool::ToolDetails;

/// Stable string identifier for a graph node.
///
/// Ids are assigned by the data-loading layer and stay constant across render
/// passes, so they double as lookup keys for hover/selection/animation state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 2D position in graph coordinates. Positions are owned and mutated by the
/// layout layer; this crate only reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Bounding-box size shared by every rendered node of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f32,
    pub height: f32,
}

impl NodeSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Tool invocation step in a decision path.
    Tool,
    /// Alternate branch the agent considered but did not take.
    Alternate,
    /// Lineage origin (dataset, document store, API).
    DataSource,
    /// Lineage processing step.
    Transformation,
    /// Lineage terminal result.
    Output,
    /// Anything else; unknown wire tags land here.
    #[serde(other)]
    Default,
}

/// Error type for tag conversion failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagConversionError {
    #[error("Invalid node kind tag: {0}")]
    InvalidNodeKind(String),
    #[error("Invalid edge kind tag: {0}")]
    InvalidEdgeKind(String),
    #[error("Invalid graph mode tag: {0}")]
    InvalidGraphMode(String),
}

impl NodeKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            NodeKind::Tool => "tool",
            NodeKind::Alternate => "alternate",
            NodeKind::DataSource => "data_source",
            NodeKind::Transformation => "transformation",
            NodeKind::Output => "output",
            NodeKind::Default => "default",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl TryFrom<&str> for NodeKind {
    type Error = TagConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "tool" => Ok(NodeKind::Tool),
            "alternate" => Ok(NodeKind::Alternate),
            "data_source" => Ok(NodeKind::DataSource),
            "transformation" => Ok(NodeKind::Transformation),
            "output" => Ok(NodeKind::Output),
            "default" => Ok(NodeKind::Default),
            _ => Err(TagConversionError::InvalidNodeKind(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Plain provenance edge within the lineage graph.
    Flow,
    /// Synthesized link from a tool node to the lineage graph (combined view).
    CrossConnection,
    /// Synthesized link from an alternate node to a lineage output (combined view).
    AlternateConnection,
    #[serde(other)]
    Unknown,
}

impl EdgeKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            EdgeKind::Flow => "flow",
            EdgeKind::CrossConnection => "cross_connection",
            EdgeKind::AlternateConnection => "alternate_connection",
            EdgeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl TryFrom<&str> for EdgeKind {
    type Error = TagConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "flow" => Ok(EdgeKind::Flow),
            "cross_connection" => Ok(EdgeKind::CrossConnection),
            "alternate_connection" => Ok(EdgeKind::AlternateConnection),
            "unknown" => Ok(EdgeKind::Unknown),
            _ => Err(TagConversionError::InvalidEdgeKind(value.to_string())),
        }
    }
}

/// Which of the two graphs (or their combination) the console is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    Decision,
    Lineage,
    Combined,
}

impl GraphMode {
    pub fn as_tag(&self) -> &'static str {
        match self {
            GraphMode::Decision => "decision",
            GraphMode::Lineage => "lineage",
            GraphMode::Combined => "combined",
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl TryFrom<&str> for GraphMode {
    type Error = TagConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "decision" => Ok(GraphMode::Decision),
            "lineage" => Ok(GraphMode::Lineage),
            "combined" => Ok(GraphMode::Combined),
            _ => Err(TagConversionError::InvalidGraphMode(value.to_string())),
        }
    }
}

/// A visual graph vertex.
///
/// Decision-graph nodes encode their own outgoing connectivity in `connects`;
/// lineage graphs carry a separate edge list instead. `label`, `tool_details`
/// and `operations` are descriptive payload passed through untouched for the
/// rendering host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub connects: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_details: Option<ToolDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,
    /// Set by the combiner on lineage-origin nodes in the combined view.
    #[serde(default)]
    pub is_combined_view: bool,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, position: Vec2) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            position,
            connects: Vec::new(),
            tool_details: None,
            operations: Vec::new(),
            is_combined_view: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_connects(mut self, connects: Vec<NodeId>) -> Self {
        self.connects = connects;
        self
    }
}

/// A directed edge between two nodes, lineage-graph style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    /// Set by the combiner on lineage edges in the combined view.
    #[serde(default)]
    pub is_combined_view: bool,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            is_combined_view: false,
        }
    }
}
