// In: src/lib.rs

//! Pokedex Explorer
//!
//! Aggregates a catalog entry from the public creature API into a single,
//! localized view model: translated types, stats, ability, color and
//! description, a small sample of moves, and the evolution line.

// --- MODULE DECLARATIONS ---
pub mod batch;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod evolution;
pub mod gateway;
pub mod localization;
pub mod moves;
pub mod pokedex;
pub mod view;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Wire records as returned by the API.
pub use schema::{
    EntryDetail, EntryPage, EvolutionChain, EvolutionNode, FlavorTextEntry, LocalizedName,
    LocalizedResource, NamedResource, PokemonType, SpeciesInfo,
};

// --- From this crate's modules (`src/`) ---

// The pipeline and its output.
pub use pokedex::Pokedex;
pub use view::{EvolutionStage, PokemonView, StatLabel, TypeLabel};

// Remote access.
pub use gateway::{HttpTransport, ResourceGateway, Transport};

// Building blocks, usable on their own.
pub use catalog::{Catalog, CatalogPage, EntrySummary, PageCursor};
pub use config::PokedexConfig;
pub use localization::{resolve, LanguageTagged, TextKey, NOT_AVAILABLE};
pub use moves::{sample_moves, MoveSampler};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, MalformedDataError, PokedexError, PokedexResult,
    ResourceFetchError,
};
