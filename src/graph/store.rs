//! PedigreeGraph — the immutable global pedigree loaded from a document.
//!
//! Wraps a petgraph `DiGraph` (parent → child edges) together with a
//! `HashMap<String, NodeIndex>` so every lookup by variety name is O(1).
//! Edge endpoints that have no node record are kept as placeholder entries:
//! they still count as parent edges of their child but carry no data.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{PedigreeDocument, PedigreeEdge, VarietyNode};
use crate::error::{PedigreeError, Result};
use crate::pedigree::is_clone_id;

/// Node weight stored in the digraph.
#[derive(Debug, Clone)]
pub struct GraphEntry {
    pub id: String,
    /// `None` for ids that only appear as an edge endpoint.
    pub record: Option<VarietyNode>,
}

/// Read-only pedigree graph. Build once with [`PedigreeGraph::from_document`]
/// and share freely; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct PedigreeGraph {
    digraph: DiGraph<GraphEntry, ()>,
    /// Maps variety id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
    varieties: Vec<String>,
    variety_set: HashSet<String>,
}

impl PedigreeGraph {
    /// Build the graph from a parsed document.
    ///
    /// Duplicate node ids keep the first record. Repeated `(source, target)`
    /// pairs collapse into one edge.
    pub fn from_document(doc: PedigreeDocument) -> Self {
        let mut graph = Self {
            digraph: DiGraph::new(),
            node_index: HashMap::new(),
            varieties: Vec::with_capacity(doc.varieties.len()),
            variety_set: HashSet::with_capacity(doc.varieties.len()),
        };

        for node in doc.nodes {
            graph.add_record(node);
        }
        for edge in &doc.edges {
            graph.add_edge(&edge.source, &edge.target);
        }
        for name in doc.varieties {
            if graph.variety_set.insert(name.clone()) {
                graph.varieties.push(name);
            }
        }

        let clone_like = graph
            .node_index
            .keys()
            .filter(|id| is_clone_id(id))
            .count();
        if clone_like > 0 {
            warn!("{clone_like} variety id(s) end in '#<digits>'; hover highlighting may group them with the base name");
        }

        let dangling = graph
            .digraph
            .node_weights()
            .filter(|entry| entry.record.is_none())
            .count();
        if dangling > 0 {
            warn!("{dangling} edge endpoint(s) have no node record; they are treated as unknown parents");
        }
        debug!(
            "loaded pedigree: {} varieties, {} nodes, {} edges",
            graph.varieties.len(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Parse a JSON document and build the graph.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let doc: PedigreeDocument = serde_json::from_str(src).map_err(PedigreeError::Document)?;
        Ok(Self::from_document(doc))
    }

    /// Parse a JSON document from any reader and build the graph.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: PedigreeDocument =
            serde_json::from_reader(reader).map_err(PedigreeError::Document)?;
        Ok(Self::from_document(doc))
    }

    /// Read and parse a JSON document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let src = fs::read_to_string(path)?;
        Self::from_json_str(&src)
    }

    // ── Construction helpers ────────────────────────────────────────────────

    fn add_record(&mut self, node: VarietyNode) {
        match self.node_index.get(&node.id) {
            Some(&idx) => {
                let entry = &mut self.digraph[idx];
                if entry.record.is_some() {
                    warn!("duplicate node id '{}' ignored; keeping the first record", node.id);
                } else {
                    entry.record = Some(node);
                }
            }
            None => {
                let id = node.id.clone();
                let idx = self.digraph.add_node(GraphEntry {
                    id: id.clone(),
                    record: Some(node),
                });
                self.node_index.insert(id, idx);
            }
        }
    }

    fn ensure_entry(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.digraph.add_node(GraphEntry {
            id: id.to_string(),
            record: None,
        });
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, parent: &str, child: &str) {
        let from = self.ensure_entry(parent);
        let to = self.ensure_entry(child);
        if self.digraph.find_edge(from, to).is_none() {
            self.digraph.add_edge(from, to, ());
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// True if `id` is listed in the document's `varieties` array.
    pub fn contains_variety(&self, id: &str) -> bool {
        self.variety_set.contains(id)
    }

    /// Variety names in document order (deduplicated).
    pub fn varieties(&self) -> &[String] {
        &self.varieties
    }

    /// True if `id` names a node record or an edge endpoint.
    pub fn contains_id(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// The node record for `id`, if the document declared one.
    pub fn node(&self, id: &str) -> Option<&VarietyNode> {
        self.node_index
            .get(id)
            .and_then(|&idx| self.digraph[idx].record.as_ref())
    }

    /// Iterate over all declared node records.
    pub fn nodes(&self) -> impl Iterator<Item = &VarietyNode> {
        self.digraph.node_weights().filter_map(|e| e.record.as_ref())
    }

    /// All edges as `(parent, child)` in document order.
    pub fn edges(&self) -> Vec<PedigreeEdge> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| {
                PedigreeEdge::new(
                    self.digraph[e.source()].id.clone(),
                    self.digraph[e.target()].id.clone(),
                )
            })
            .collect()
    }

    /// Parent ids of `id` in document edge order, including parents
    /// without a node record. Empty if `id` is absent.
    pub fn parents(&self, id: &str) -> Vec<&str> {
        self.neighbors_ordered(id, Direction::Incoming)
    }

    /// Child ids of `id` in document edge order. Empty if `id` is absent.
    pub fn children(&self, id: &str) -> Vec<&str> {
        self.neighbors_ordered(id, Direction::Outgoing)
    }

    fn neighbors_ordered(&self, id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut found: Vec<_> = self
            .digraph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = if dir == Direction::Incoming {
                    e.source()
                } else {
                    e.target()
                };
                (e.id(), other)
            })
            .collect();
        found.sort_by_key(|(eidx, _)| *eidx);
        found
            .into_iter()
            .map(|(_, n)| self.digraph[n].id.as_str())
            .collect()
    }

    /// Number of declared node records (placeholders excluded).
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the whole pedigree is acyclic. Diagnostic only; the
    /// engine guards against cycles on every traversal anyway.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_store.rs"]
mod tests;
