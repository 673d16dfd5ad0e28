use serde::{Deserialize, Serialize};

/// Descriptive payload attached to tool nodes.
///
/// The geometry and combiner layers never look inside this; it exists so the
/// rendering host can show tool metadata without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Backend the tool is served from, e.g. an MCP server name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl ToolDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            server: None,
        }
    }
}
