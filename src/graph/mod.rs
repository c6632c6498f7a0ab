//! Graph store — the global pedigree and its document types.

pub mod store;
pub mod types;

pub use store::{GraphEntry, PedigreeGraph};
pub use types::{PedigreeDocument, PedigreeEdge, VarietyData, VarietyNode};
