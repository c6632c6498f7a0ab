//! Column layout — one column per generation, each column centred on y = 0.
//!
//! Position depends only on a node's level and its order of appearance among
//! nodes of the same level, so identical input always yields identical
//! coordinates.

use std::collections::BTreeMap;

use super::types::{Position, PositionedNode};
use crate::config::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT, ExplorerConfig};
use crate::pedigree::SubgraphNode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub column_width: f64,
    pub row_height: f64,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl ColumnLayout {
    pub fn new(column_width: f64, row_height: f64) -> Self {
        Self {
            column_width,
            row_height,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.column_width, config.row_height)
    }

    /// Position every node. Output order matches input order.
    pub fn layout(&self, nodes: &[SubgraphNode]) -> Vec<PositionedNode> {
        // level → indices of its nodes, in input order
        let mut columns: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            columns.entry(node.level).or_default().push(i);
        }

        let mut placed: Vec<Option<(Position, usize)>> = vec![None; nodes.len()];
        for (&level, members) in &columns {
            let x = level as f64 * self.column_width;
            let offset = (members.len() as f64 - 1.0) * self.row_height / 2.0;
            for (row, &i) in members.iter().enumerate() {
                let y = row as f64 * self.row_height - offset;
                placed[i] = Some((Position::new(x, y), row));
            }
        }

        nodes
            .iter()
            .zip(placed)
            .map(|(node, slot)| {
                let (position, row) = slot.unwrap_or_default();
                PositionedNode {
                    node: node.clone(),
                    position,
                    row,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_columns.rs"]
mod tests;
