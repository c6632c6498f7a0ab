//! Species composition — recursive ancestry breakdown by normalized species.
//!
//! A founder (no parent edges) is 100% its declared species. Any other
//! variety is the weighted sum of its parents' compositions. Cycles are cut
//! with a per-path visited set that is copied into each recursive branch, so
//! sibling branches never block each other.

use std::collections::{HashMap, HashSet};

use super::types::{Species, SpeciesComposition, bare_id};
use crate::config::ParentWeighting;
use crate::graph::PedigreeGraph;

/// Substring → species table, checked in order against the lowercased name.
const SPECIES_VOCABULARY: &[(&str, Species)] = &[
    ("vinifera", Species::Vinifera),
    ("riparia", Species::Riparia),
    ("labrusca", Species::Labrusca),
    ("rupestris", Species::Rupestris),
    ("aestivalis", Species::Aestivalis),
    ("lincecumii", Species::Aestivalis),
    ("amurensis", Species::Amurensis),
    ("rotundifolia", Species::Rotundifolia),
    ("muscadinia", Species::Rotundifolia),
];

const WEIGHT_EPSILON: f64 = 1e-12;

/// Map a free-text botanical name onto the species vocabulary.
/// Missing, empty, or unrecognized names are `Unknown`.
pub fn normalize_species(raw: Option<&str>) -> Species {
    let Some(raw) = raw else {
        return Species::Unknown;
    };
    let lowered = raw.to_lowercase();
    SPECIES_VOCABULARY
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|&(_, species)| species)
        .unwrap_or(Species::Unknown)
}

/// Computes species compositions against one graph with one weighting policy.
pub struct CompositionCalculator<'g> {
    graph: &'g PedigreeGraph,
    weighting: ParentWeighting,
}

impl<'g> CompositionCalculator<'g> {
    pub fn new(graph: &'g PedigreeGraph, weighting: ParentWeighting) -> Self {
        Self { graph, weighting }
    }

    /// Composition of the variety behind `id`. A clone id resolves to its
    /// base variety unless the graph has a variety with that exact name.
    /// Unknown ids yield an empty composition.
    pub fn calculate(&self, id: &str) -> SpeciesComposition {
        let variety = if self.graph.contains_id(id) {
            id
        } else {
            bare_id(id)
        };
        self.calculate_on_path(variety, HashSet::new())
    }

    fn calculate_on_path<'a>(&'a self, id: &'a str, mut path: HashSet<&'a str>) -> SpeciesComposition {
        if !path.insert(id) {
            return SpeciesComposition::new();
        }
        let Some(node) = self.graph.node(id) else {
            return SpeciesComposition::new();
        };

        let parents = self.graph.parents(id);
        if parents.is_empty() {
            return SpeciesComposition::pure(normalize_species(node.data.species.as_deref()));
        }

        let weight = self.weighting.weight(parents.len());
        let mut composition = SpeciesComposition::new();
        for parent in &parents {
            let inherited = self.calculate_on_path(parent, path.clone());
            composition.add_scaled(&inherited, weight);
        }

        let shortfall = 1.0 - weight * parents.len() as f64;
        if shortfall > WEIGHT_EPSILON {
            composition.add(Species::Unknown, shortfall);
        }
        composition
    }
}

/// Memoizing wrapper used while extracting one subgraph. Each lookup still
/// starts from an empty path, so cached values equal uncached ones.
pub(crate) struct CompositionCache<'g> {
    calculator: CompositionCalculator<'g>,
    cache: HashMap<String, SpeciesComposition>,
}

impl<'g> CompositionCache<'g> {
    pub(crate) fn new(graph: &'g PedigreeGraph, weighting: ParentWeighting) -> Self {
        Self {
            calculator: CompositionCalculator::new(graph, weighting),
            cache: HashMap::new(),
        }
    }

    pub(crate) fn get(&mut self, variety: &str) -> &SpeciesComposition {
        let calculator = &self.calculator;
        self.cache
            .entry(variety.to_string())
            .or_insert_with(|| calculator.calculate(variety))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_pedigree_composition.rs"]
mod tests;
