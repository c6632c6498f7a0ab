//! Pedigree engine — species composition, ancestor extraction and levels.

pub mod composition;
pub mod extract;
pub mod levels;
pub mod types;

pub use composition::{CompositionCalculator, normalize_species};
pub use extract::{SubgraphExtractor, extract_subgraph};
pub use levels::{LevelAssignment, assign_levels};
pub use types::{
    Species, SpeciesComposition, SpeciesShare, Subgraph, SubgraphEdge, SubgraphNode, bare_id,
    clone_id, is_clone_id,
};
