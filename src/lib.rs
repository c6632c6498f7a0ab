//! vitis-pedigree — ancestor subgraphs, species composition and layered
//! layout for grape-variety pedigrees.
//!
//! Pipeline: `PedigreeGraph` → extract (with composition) → levels → layout,
//! with hover highlighting applied on top. Every pass is a pure function of
//! its inputs; the caller owns the selection state in [`ExplorerState`].

pub mod config;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod layout;
pub mod pedigree;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use config::{ExplorerConfig, ExplorerState, ParentWeighting};
pub use error::{PedigreeError, Result};
pub use graph::{PedigreeDocument, PedigreeEdge, PedigreeGraph, VarietyData, VarietyNode};
pub use highlight::{EdgeStyle, highlight_edges, highlight_nodes};
pub use layout::{ColumnLayout, Position, PositionedNode, layout_nodes};
pub use pedigree::{
    Species, SpeciesComposition, SpeciesShare, Subgraph, SubgraphEdge, SubgraphNode,
    SubgraphExtractor, assign_levels, extract_subgraph,
};

/// Everything a renderer needs for one explorer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedigreeView {
    pub root: String,
    pub duplicate_mode: bool,
    pub hovered_id: Option<String>,
    /// Number of generations shown (max level + 1); 0 for an empty view.
    pub generations: usize,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<SubgraphEdge>,
}

impl PedigreeView {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Re-apply highlighting for a new hover without re-extracting.
    pub fn with_hover(&self, hovered_id: Option<&str>) -> Self {
        let inner: Vec<SubgraphNode> = self.nodes.iter().map(|p| p.node.clone()).collect();
        let flagged = highlight_nodes(&inner, hovered_id);
        let nodes = self
            .nodes
            .iter()
            .zip(flagged)
            .map(|(placed, node)| PositionedNode {
                node,
                ..placed.clone()
            })
            .collect();
        Self {
            root: self.root.clone(),
            duplicate_mode: self.duplicate_mode,
            hovered_id: hovered_id.map(str::to_owned),
            generations: self.generations,
            nodes,
            edges: highlight_edges(&self.edges, hovered_id),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(PedigreeError::Serialize)
    }
}

/// Run extract → levels → highlight → layout for one explorer state.
pub fn explore(graph: &PedigreeGraph, state: &ExplorerState, config: &ExplorerConfig) -> PedigreeView {
    let subgraph = SubgraphExtractor::new(graph, config.clone())
        .extract(&state.selected_variety, state.duplicate_mode);
    let hovered = state.hovered_id.as_deref();

    let nodes = highlight_nodes(&subgraph.nodes, hovered);
    let edges = highlight_edges(&subgraph.edges, hovered);
    let generations = nodes.iter().map(|n| n.level + 1).max().unwrap_or(0);

    PedigreeView {
        root: state.selected_variety.clone(),
        duplicate_mode: state.duplicate_mode,
        hovered_id: state.hovered_id.clone(),
        generations,
        nodes: ColumnLayout::from_config(config).layout(&nodes),
        edges,
    }
}

/// Species composition of a variety under the default weighting.
/// Clone suffixes are ignored; unknown ids give an empty composition.
pub fn calculate_species_composition(graph: &PedigreeGraph, variety_id: &str) -> SpeciesComposition {
    pedigree::CompositionCalculator::new(graph, ParentWeighting::default()).calculate(variety_id)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
