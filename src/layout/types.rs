//! Layout types: Position, PositionedNode.

use serde::{Deserialize, Serialize};

use crate::pedigree::SubgraphNode;

// ─── Position ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── PositionedNode ──────────────────────────────────────────────────────────

/// A subgraph node with its computed canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    #[serde(flatten)]
    pub node: SubgraphNode,
    pub position: Position,
    /// Index of the node within its level column, top to bottom.
    pub row: usize,
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
