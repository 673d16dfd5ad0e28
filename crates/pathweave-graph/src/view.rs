use pathweave_core::NodeId;
use std::collections::HashMap;

/// Caller-owned UI state feeding the geometry engine.
///
/// The engine never stores hover/selection/animation state of its own; the
/// hosting view tracks these between frames and passes the current snapshot
/// into every computation (everything derived from it is recomputed per
/// render).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub hovered: Option<NodeId>,
    pub selected: Option<NodeId>,
    /// Animation flags keyed by path id (`"{source}-{target}"`). Absent keys
    /// read as not animated.
    pub animated_paths: HashMap<String, bool>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given node id is currently hovered or selected.
    pub fn touches(&self, id: &NodeId) -> bool {
        self.hovered.as_ref() == Some(id) || self.selected.as_ref() == Some(id)
    }

    pub fn is_animated(&self, path_id: &str) -> bool {
        self.animated_paths.get(path_id).copied().unwrap_or(false)
    }

    pub fn set_hovered(&mut self, id: Option<NodeId>) {
        self.hovered = id;
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub fn set_animated(&mut self, path_id: impl Into<String>, animated: bool) {
        self.animated_paths.insert(path_id.into(), animated);
    }
}
