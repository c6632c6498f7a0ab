//! Layout engine — turns leveled subgraph nodes into canvas coordinates.

pub mod columns;
pub mod types;

pub use columns::ColumnLayout;
pub use types::{Position, PositionedNode};

use crate::pedigree::SubgraphNode;

/// Lay out nodes with the default column width and row height.
pub fn layout_nodes(nodes: &[SubgraphNode]) -> Vec<PositionedNode> {
    ColumnLayout::default().layout(nodes)
}
