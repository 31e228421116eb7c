//! Species metadata for the Pokerun run tracker.
//!
//! A read-only, eventually consistent view of PokeAPI used to draw sprites
//! and suggest species names. Nothing in the roster rules depends on it.
//!
//! # Modules
//!
//! - [`normalize`] -- Typed name to PokeAPI slug, and back
//! - [`catalog`] -- Name-to-id catalog, sprites and search
//! - [`source`] -- HTTP source with a shared, lazily loaded catalog
//! - [`error`] -- [`SpeciesError`]

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod source;

pub use catalog::{SpeciesCatalog, SpeciesMatch, Sprite};
pub use error::SpeciesError;
pub use normalize::{normalize_species_name, pretty_name};
pub use source::{DEFAULT_SEARCH_LIMIT, SpeciesConfig, SpeciesSource};
