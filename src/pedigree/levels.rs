//! Level assignment — longest-path depth from the root by iterative relaxation.
//!
//! Every parent ends up at least one level deeper than its deepest child, so
//! a variety reached by paths of different length is drawn at its most
//! distant generation. The root is pinned at level 0.

use std::collections::HashMap;

use log::warn;

use super::types::SubgraphEdge;
use crate::config::DEFAULT_MAX_LEVEL_PASSES;

/// Result of a level assignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelAssignment {
    /// node id → level (0 = root).
    pub levels: HashMap<String, usize>,
    /// Relaxation passes performed.
    pub passes: usize,
    /// False if the pass cap was hit while levels were still changing.
    pub converged: bool,
}

impl LevelAssignment {
    /// Relax levels over `edges` (parent → child) until stable or until
    /// `max_passes` passes have run. Edges touching ids outside `node_ids`
    /// are ignored.
    pub fn assign<S: AsRef<str>>(
        node_ids: &[S],
        edges: &[SubgraphEdge],
        root_id: &str,
        max_passes: usize,
    ) -> Self {
        let mut levels: HashMap<String, usize> = node_ids
            .iter()
            .map(|id| (id.as_ref().to_string(), 0))
            .collect();
        if let Some(root) = levels.get_mut(root_id) {
            *root = 0;
        }

        let mut passes = 0;
        let mut converged = false;
        while passes < max_passes {
            passes += 1;
            let mut changed = false;
            for edge in edges {
                if edge.source == root_id {
                    continue;
                }
                let Some(&child_level) = levels.get(&edge.target) else {
                    continue;
                };
                let Some(parent_level) = levels.get_mut(&edge.source) else {
                    continue;
                };
                if *parent_level < child_level + 1 {
                    *parent_level = child_level + 1;
                    changed = true;
                }
            }
            if !changed {
                converged = true;
                break;
            }
        }

        if !converged && !edges.is_empty() {
            warn!(
                "level assignment for '{root_id}' did not converge after {passes} passes; using partial levels"
            );
        }

        Self {
            levels,
            passes,
            converged,
        }
    }

    /// Level of `id`, 0 if unknown.
    pub fn level(&self, id: &str) -> usize {
        self.levels.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct generations (max level + 1); 0 when empty.
    pub fn level_count(&self) -> usize {
        self.levels.values().max().map_or(0, |max| max + 1)
    }
}

/// Assign levels with the default pass cap.
pub fn assign_levels<S: AsRef<str>>(
    node_ids: &[S],
    edges: &[SubgraphEdge],
    root_id: &str,
) -> HashMap<String, usize> {
    LevelAssignment::assign(node_ids, edges, root_id, DEFAULT_MAX_LEVEL_PASSES).levels
}

#[cfg(test)]
#[path = "../../tests/rust/test_pedigree_levels.rs"]
mod tests;
