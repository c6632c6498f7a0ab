//! Engine constants and the caller-owned explorer state.

use serde::{Deserialize, Serialize};

/// Default ancestor depth bound for subgraph extraction.
pub const DEFAULT_MAX_DEPTH: usize = 10;
/// Default relaxation pass cap for level assignment.
pub const DEFAULT_MAX_LEVEL_PASSES: usize = 20;
pub const DEFAULT_COLUMN_WIDTH: f64 = 250.0;
pub const DEFAULT_ROW_HEIGHT: f64 = 80.0;

/// How a child's composition is split between its parent edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentWeighting {
    /// Each parent contributes exactly 0.5; a single known parent leaves
    /// the other half as `unknown`. More than two parents fall back to `1/n`.
    #[default]
    FixedHalf,
    /// Each of `n` parent edges contributes `1/n`.
    EvenSplit,
}

impl ParentWeighting {
    /// Weight given to each of `parent_count` parent edges.
    pub fn weight(self, parent_count: usize) -> f64 {
        match self {
            ParentWeighting::FixedHalf if parent_count <= 2 => 0.5,
            _ if parent_count == 0 => 0.0,
            _ => 1.0 / parent_count as f64,
        }
    }
}

/// Tunables for the extract → level → layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Maximum number of generations walked back from the root.
    pub max_depth: usize,
    /// Relaxation passes before level assignment gives up on convergence.
    pub max_level_passes: usize,
    /// Horizontal distance between generation columns.
    pub column_width: f64,
    /// Vertical distance between nodes of the same generation.
    pub row_height: f64,
    pub parent_weighting: ParentWeighting,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_level_passes: DEFAULT_MAX_LEVEL_PASSES,
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            parent_weighting: ParentWeighting::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(src: &str) -> crate::error::Result<Self> {
        serde_json::from_str(src).map_err(crate::error::PedigreeError::Document)
    }
}

/// What the user currently has selected. The caller owns this and passes it
/// into [`crate::explore`] on every change; the engine keeps no state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerState {
    pub selected_variety: String,
    pub duplicate_mode: bool,
    pub hovered_id: Option<String>,
}

impl ExplorerState {
    pub fn new(selected_variety: impl Into<String>) -> Self {
        Self {
            selected_variety: selected_variety.into(),
            duplicate_mode: false,
            hovered_id: None,
        }
    }

    pub fn with_duplicates(mut self, duplicate_mode: bool) -> Self {
        self.duplicate_mode = duplicate_mode;
        self
    }

    pub fn with_hover(mut self, hovered_id: Option<String>) -> Self {
        self.hovered_id = hovered_id;
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
