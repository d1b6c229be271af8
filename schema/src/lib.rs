// Pokedex Explorer Schema - Shared type definitions
// This crate contains the records returned by the catalog API and the enums
// that both the aggregation pipeline and its presentation layer agree on.

// Re-export the main types
pub use pokemon_data::*;
pub use pokemon_types::*;
pub use resources::*;
pub use species_data::*;

pub mod pokemon_data;
pub mod pokemon_types;
pub mod resources;
pub mod species_data;
