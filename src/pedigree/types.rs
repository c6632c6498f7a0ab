//! Derived pedigree types: species, compositions, subgraph nodes and edges,
//! plus the clone-id naming used by duplicated mode.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::graph::VarietyData;
use crate::highlight::EdgeStyle;

// ─── Clone ids ───────────────────────────────────────────────────────────────

/// Separator between a variety name and its occurrence counter.
pub const CLONE_SEPARATOR: char = '#';

static CLONE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.+)#(\d+)$").expect("clone suffix pattern is valid")
});

/// Strip a trailing `#<digits>` clone suffix. Other `#` characters are part
/// of the name and are left alone.
pub fn bare_id(id: &str) -> &str {
    match CLONE_SUFFIX.captures(id).and_then(|c| c.get(1)) {
        Some(m) => &id[..m.end()],
        None => id,
    }
}

/// True if `id` carries a `#<digits>` clone suffix.
pub fn is_clone_id(id: &str) -> bool {
    CLONE_SUFFIX.is_match(id)
}

/// Id of the `occurrence`-th extra instance of `name` (1-based).
pub fn clone_id(name: &str, occurrence: usize) -> String {
    format!("{name}{CLONE_SEPARATOR}{occurrence}")
}

// ─── Species ─────────────────────────────────────────────────────────────────

/// Normalized botanical species. Declared in alphabetical order so map
/// iteration and tie-breaks are alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Aestivalis,
    Amurensis,
    Labrusca,
    Riparia,
    Rotundifolia,
    Rupestris,
    Unknown,
    Vinifera,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Aestivalis => "aestivalis",
            Species::Amurensis => "amurensis",
            Species::Labrusca => "labrusca",
            Species::Riparia => "riparia",
            Species::Rotundifolia => "rotundifolia",
            Species::Rupestris => "rupestris",
            Species::Unknown => "unknown",
            Species::Vinifera => "vinifera",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── SpeciesComposition ──────────────────────────────────────────────────────

/// Fractional ancestry by species. Weights sum to at most 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesComposition(BTreeMap<Species, f64>);

impl SpeciesComposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// A founder composition: all weight on one species.
    pub fn pure(species: Species) -> Self {
        let mut map = BTreeMap::new();
        map.insert(species, 1.0);
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight for `species`, 0.0 if absent.
    pub fn get(&self, species: Species) -> f64 {
        self.0.get(&species).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn add(&mut self, species: Species, weight: f64) {
        *self.0.entry(species).or_insert(0.0) += weight;
    }

    /// Accumulate `other` scaled by `weight`.
    pub fn add_scaled(&mut self, other: &SpeciesComposition, weight: f64) {
        for (&species, &w) in &other.0 {
            self.add(species, w * weight);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.0.iter().map(|(&s, &w)| (s, w))
    }

    /// Shares sorted by descending proportion, ties alphabetical.
    pub fn shares(&self) -> Vec<SpeciesShare> {
        let mut shares: Vec<SpeciesShare> = self
            .iter()
            .map(|(species, proportion)| SpeciesShare {
                species,
                proportion,
            })
            .collect();
        shares.sort_by(|a, b| {
            b.proportion
                .total_cmp(&a.proportion)
                .then(a.species.cmp(&b.species))
        });
        shares
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesShare {
    pub species: Species,
    pub proportion: f64,
}

// ─── SubgraphNode ────────────────────────────────────────────────────────────

/// One node instance of an extracted ancestor subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgraphNode {
    /// Variety id, or a clone id (`name#n`) for repeated instances.
    pub id: String,
    /// The underlying variety name (clone suffix stripped).
    pub variety: String,
    pub data: VarietyData,
    pub level: usize,
    pub is_selected: bool,
    pub is_duplicate: bool,
    #[serde(rename = "speciesComposition")]
    pub species_composition: Vec<SpeciesShare>,
    /// Set by the highlight pass when the node's variety is hovered.
    #[serde(default)]
    pub highlighted: bool,
}

// ─── SubgraphEdge ────────────────────────────────────────────────────────────

/// A parent → child edge between two subgraph node instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgraphEdge {
    pub id: String,
    /// Parent instance id.
    pub source: String,
    /// Child instance id.
    pub target: String,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl SubgraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}->{target}"),
            source,
            target,
            style: EdgeStyle::default(),
        }
    }
}

// ─── Subgraph ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: Vec<SubgraphNode>,
    pub edges: Vec<SubgraphEdge>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&SubgraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of instances of `variety` (bare name) in the subgraph.
    pub fn instance_count(&self, variety: &str) -> usize {
        self.nodes.iter().filter(|n| n.variety == variety).count()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_pedigree_types.rs"]
mod tests;
