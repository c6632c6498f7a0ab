//! Wire types for the pedigree document: varieties, nodes and parent→child edges.

use serde::{Deserialize, Deserializer, Serialize};

// ─── VarietyData ─────────────────────────────────────────────────────────────

/// Descriptive record attached to a variety. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyData {
    /// Free-text botanical name, e.g. "Vitis riparia x V. vinifera".
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub berry_color: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    /// VIVC catalogue number. Accepts a JSON string or number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub vivc_number: Option<String>,
    /// Accepts a JSON string or number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year_crossing: Option<String>,
    #[serde(default)]
    pub breeder: Option<String>,
}

// ─── VarietyNode ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyNode {
    /// Variety name; the natural key.
    pub id: String,
    #[serde(default)]
    pub data: VarietyData,
}

impl VarietyNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: VarietyData::default(),
        }
    }

    pub fn with_species(id: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: VarietyData {
                species: Some(species.into()),
                ..VarietyData::default()
            },
        }
    }
}

// ─── PedigreeEdge ────────────────────────────────────────────────────────────

/// A cross relationship: `source` is a parent of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PedigreeEdge {
    pub source: String,
    pub target: String,
}

impl PedigreeEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// ─── PedigreeDocument ────────────────────────────────────────────────────────

/// The flat document the engine is loaded from. All three arrays are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedigreeDocument {
    pub varieties: Vec<String>,
    pub nodes: Vec<VarietyNode>,
    pub edges: Vec<PedigreeEdge>,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    }))
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_types.rs"]
mod tests;
