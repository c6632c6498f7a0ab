//! Subgraph extraction — walk from a root variety toward its ancestors.
//!
//! Two topologies:
//!   - merged: each ancestor variety appears once, however many lineage
//!     paths reach it;
//!   - duplicated: every distinct path from the root produces its own node
//!     instance. The first instance keeps the bare id, later ones get
//!     `name#1`, `name#2`, ... skipping numbers that are real variety ids.
//!
//! The walk is depth-first, stops `max_depth` generations above the root,
//! skips parents without a node record, and never re-enters a variety that
//! is already on the current path.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::composition::CompositionCache;
use super::levels::LevelAssignment;
use super::types::{Subgraph, SubgraphEdge, SubgraphNode, clone_id};
use crate::config::ExplorerConfig;
use crate::graph::PedigreeGraph;

/// Extracts ancestor subgraphs from one graph with one configuration.
pub struct SubgraphExtractor<'g> {
    graph: &'g PedigreeGraph,
    config: ExplorerConfig,
}

impl<'g> SubgraphExtractor<'g> {
    pub fn new(graph: &'g PedigreeGraph, config: ExplorerConfig) -> Self {
        Self { graph, config }
    }

    /// Extract the ancestor subgraph of `root_id`, with levels assigned.
    ///
    /// Returns an empty subgraph if `root_id` is not a listed variety or has
    /// no node record.
    pub fn extract(&self, root_id: &str, duplicate_mode: bool) -> Subgraph {
        if !self.graph.contains_variety(root_id) {
            warn!("'{root_id}' is not a known variety; returning an empty pedigree");
            return Subgraph::default();
        }
        let graph = self.graph;
        let Some(root) = graph.node(root_id) else {
            warn!("variety '{root_id}' has no node record; returning an empty pedigree");
            return Subgraph::default();
        };

        let mut walk = Walk {
            graph,
            compositions: CompositionCache::new(graph, self.config.parent_weighting),
            max_depth: self.config.max_depth,
            duplicate_mode,
            nodes: Vec::new(),
            edges: Vec::new(),
            expanded_at: HashMap::new(),
            edge_keys: HashSet::new(),
            next_clone: HashMap::new(),
        };
        let mut path = Vec::new();
        walk.visit(root.id.as_str(), 0, &mut path);

        let Walk {
            mut nodes, edges, ..
        } = walk;

        let node_ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let assignment =
            LevelAssignment::assign(&node_ids, &edges, root_id, self.config.max_level_passes);
        for node in &mut nodes {
            node.level = assignment.level(&node.id);
        }

        debug!(
            "extracted pedigree of '{}' ({} mode): {} nodes, {} edges, {} generations, {} level passes",
            root_id,
            if duplicate_mode { "duplicated" } else { "merged" },
            nodes.len(),
            edges.len(),
            assignment.level_count(),
            assignment.passes
        );

        Subgraph { nodes, edges }
    }
}

/// Extract with the default configuration.
pub fn extract_subgraph(graph: &PedigreeGraph, root_id: &str, duplicate_mode: bool) -> Subgraph {
    SubgraphExtractor::new(graph, ExplorerConfig::default()).extract(root_id, duplicate_mode)
}

// ─── Traversal state ─────────────────────────────────────────────────────────

struct Walk<'g> {
    graph: &'g PedigreeGraph,
    compositions: CompositionCache<'g>,
    max_depth: usize,
    duplicate_mode: bool,
    nodes: Vec<SubgraphNode>,
    edges: Vec<SubgraphEdge>,
    /// Shallowest depth each variety has been expanded from (merged mode).
    expanded_at: HashMap<&'g str, usize>,
    /// `(source, target)` pairs already recorded (merged mode).
    edge_keys: HashSet<(String, String)>,
    /// Next clone number to try per variety (duplicated mode).
    next_clone: HashMap<&'g str, usize>,
}

impl<'g> Walk<'g> {
    /// Visit `variety` at `depth`, emitting it and its ancestors. Returns the
    /// instance id the caller should connect its edge to.
    ///
    /// In merged mode a variety reached again at a shallower depth keeps its
    /// node but has its parents walked again, so the depth bound never hides
    /// ancestors that a shorter path reaches.
    fn visit(&mut self, variety: &'g str, depth: usize, path: &mut Vec<&'g str>) -> String {
        let instance_id = if self.duplicate_mode {
            self.emit(variety, depth)
        } else {
            match self.expanded_at.get(variety) {
                Some(&seen) if seen <= depth => return variety.to_string(),
                Some(&seen) => {
                    debug!("re-expanding '{variety}' at depth {depth} (was {seen})");
                    variety.to_string()
                }
                None => self.emit(variety, depth),
            }
        };
        self.expanded_at.insert(variety, depth);
        if depth >= self.max_depth {
            return instance_id;
        }

        let graph = self.graph;
        path.push(variety);
        for parent in graph.parents(variety) {
            if graph.node(parent).is_none() {
                continue;
            }
            if path.contains(&parent) {
                debug!("cycle through '{parent}' cut below '{variety}'");
                continue;
            }
            let parent_id = self.visit(parent, depth + 1, path);
            self.push_edge(parent_id, instance_id.clone());
        }
        path.pop();

        instance_id
    }

    fn push_edge(&mut self, source: String, target: String) {
        if !self.duplicate_mode && !self.edge_keys.insert((source.clone(), target.clone())) {
            return;
        }
        self.edges.push(SubgraphEdge::new(source, target));
    }

    /// Id for a new instance of `variety`. The first instance keeps the bare
    /// name; clone numbers that collide with a real variety are skipped.
    fn instance_id(&mut self, variety: &'g str) -> (String, bool) {
        let Some(next) = self.next_clone.get_mut(variety) else {
            self.next_clone.insert(variety, 1);
            return (variety.to_string(), false);
        };
        let graph = self.graph;
        let mut candidate = clone_id(variety, *next);
        while graph.contains_id(&candidate) {
            *next += 1;
            candidate = clone_id(variety, *next);
        }
        *next += 1;
        (candidate, true)
    }

    fn emit(&mut self, variety: &'g str, depth: usize) -> String {
        let (id, is_duplicate) = self.instance_id(variety);
        let data = self
            .graph
            .node(variety)
            .map(|n| n.data.clone())
            .unwrap_or_default();
        let species_composition = self.compositions.get(variety).shares();

        self.nodes.push(SubgraphNode {
            id: id.clone(),
            variety: variety.to_string(),
            data,
            level: 0,
            is_selected: depth == 0,
            is_duplicate,
            species_composition,
            highlighted: false,
        });
        id
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_pedigree_extract.rs"]
mod tests;
