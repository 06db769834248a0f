use serde::Serialize;
use soctok_core::Officer;

/// An officer with the position the layout engine settled on. Positions are
/// assigned exactly once per render and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    #[serde(flatten)]
    pub officer: Officer,
    pub x: f64,
    pub y: f64,
}

/// A link resolved to indices into [`LayoutedGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutedLink {
    pub source: usize,
    pub target: usize,
    pub crs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutedGraph {
    pub focused_id: i64,
    pub nodes: Vec<PositionedNode>,
    pub links: Vec<LayoutedLink>,
}

impl LayoutedGraph {
    pub fn focused_node(&self) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.officer.id == self.focused_id)
    }

    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().map(|n| (n.x, n.y))
    }
}
