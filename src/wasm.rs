//! WASM bindings for vitis-pedigree.
//!
//! Exposes a `PedigreeExplorer` class to JavaScript via wasm-bindgen. Views
//! and compositions cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::{
    ExplorerConfig, ExplorerState, PedigreeGraph, PedigreeView, explore,
    pedigree::CompositionCalculator,
};

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// A loaded pedigree document plus engine configuration.
#[wasm_bindgen]
pub struct PedigreeExplorer {
    graph: PedigreeGraph,
    config: ExplorerConfig,
}

#[wasm_bindgen]
impl PedigreeExplorer {
    /// Load a `{varieties, nodes, edges}` JSON document.
    #[wasm_bindgen(constructor)]
    pub fn new(document: &str) -> Result<PedigreeExplorer, JsError> {
        let graph = PedigreeGraph::from_json_str(document).map_err(js_err)?;
        Ok(Self {
            graph,
            config: ExplorerConfig::default(),
        })
    }

    /// Replace the engine configuration with a JSON object; missing fields
    /// keep their defaults.
    #[wasm_bindgen(js_name = "setConfig")]
    pub fn set_config(&mut self, config: &str) -> Result<(), JsError> {
        self.config = ExplorerConfig::from_json_str(config).map_err(js_err)?;
        Ok(())
    }

    /// Variety names as a JSON array.
    pub fn varieties(&self) -> Result<String, JsError> {
        serde_json::to_string(self.graph.varieties()).map_err(js_err)
    }

    /// Extract, lay out and highlight the pedigree of `root`.
    /// `hovered` may be an empty string for no hover.
    pub fn explore(&self, root: &str, duplicates: bool, hovered: &str) -> Result<String, JsError> {
        let state = ExplorerState::new(root)
            .with_duplicates(duplicates)
            .with_hover((!hovered.is_empty()).then(|| hovered.to_string()));
        let view = explore(&self.graph, &state, &self.config);
        serde_json::to_string(&view).map_err(js_err)
    }

    /// Re-highlight a view previously returned by `explore`.
    #[wasm_bindgen(js_name = "applyHover")]
    pub fn apply_hover(&self, view: &str, hovered: &str) -> Result<String, JsError> {
        let view: PedigreeView = serde_json::from_str(view).map_err(js_err)?;
        let hovered = (!hovered.is_empty()).then_some(hovered);
        serde_json::to_string(&view.with_hover(hovered)).map_err(js_err)
    }

    /// Sorted species composition of one variety as a JSON array.
    pub fn composition(&self, variety: &str) -> Result<String, JsError> {
        let composition = CompositionCalculator::new(&self.graph, self.config.parent_weighting)
            .calculate(variety);
        serde_json::to_string(&composition.shares()).map_err(js_err)
    }
}
