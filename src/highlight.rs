//! Hover highlighting for edges and nodes.
//!
//! Matching is by variety: clone suffixes are stripped from the hovered id
//! and from every node/edge endpoint, so hovering any instance of a variety
//! lights up all of its instances and every edge touching one of them.

use serde::{Deserialize, Serialize};

use crate::pedigree::{SubgraphEdge, SubgraphNode, bare_id};

pub const EDGE_COLOR: &str = "#b1b1b7";
pub const HIGHLIGHT_COLOR: &str = "#7c3aed";

const EDGE_WIDTH: f64 = 1.5;
const HIGHLIGHT_WIDTH: f64 = 3.0;
const DIMMED_OPACITY: f64 = 0.25;

/// Presentation attributes for one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub animated: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::base()
    }
}

impl EdgeStyle {
    /// Style with nothing hovered.
    pub fn base() -> Self {
        Self {
            stroke: EDGE_COLOR.to_string(),
            stroke_width: EDGE_WIDTH,
            opacity: 1.0,
            animated: false,
        }
    }

    /// Style for an edge touching the hovered variety.
    pub fn highlighted() -> Self {
        Self {
            stroke: HIGHLIGHT_COLOR.to_string(),
            stroke_width: HIGHLIGHT_WIDTH,
            opacity: 1.0,
            animated: true,
        }
    }

    /// Style for an edge unrelated to an active hover.
    pub fn dimmed() -> Self {
        Self {
            opacity: DIMMED_OPACITY,
            ..Self::base()
        }
    }
}

/// True if the edge has an endpoint whose variety is `variety`.
pub fn edge_touches(edge: &SubgraphEdge, variety: &str) -> bool {
    bare_id(&edge.source) == variety || bare_id(&edge.target) == variety
}

/// Restyle every edge for the given hover. `None` resets all edges.
pub fn highlight_edges(edges: &[SubgraphEdge], hovered_id: Option<&str>) -> Vec<SubgraphEdge> {
    let hovered = hovered_id.map(bare_id);
    edges
        .iter()
        .map(|edge| {
            let style = match hovered {
                None => EdgeStyle::base(),
                Some(variety) if edge_touches(edge, variety) => EdgeStyle::highlighted(),
                Some(_) => EdgeStyle::dimmed(),
            };
            SubgraphEdge {
                style,
                ..edge.clone()
            }
        })
        .collect()
}

/// Flag every node instance of the hovered variety. `None` clears all flags.
pub fn highlight_nodes(nodes: &[SubgraphNode], hovered_id: Option<&str>) -> Vec<SubgraphNode> {
    let hovered = hovered_id.map(bare_id);
    nodes
        .iter()
        .map(|node| SubgraphNode {
            highlighted: hovered.is_some_and(|variety| bare_id(&node.id) == variety),
            ..node.clone()
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/rust/test_highlight.rs"]
mod tests;
