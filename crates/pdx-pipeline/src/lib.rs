//! Extract-transform-load of PokeAPI records into the pokedex store.
//!
//! ## Stages
//!
//! - [`Source`] — Fetches one raw record per upstream identifier
//! - [`transform`] — Normalizes a raw record into a [`PokemonCreate`](pdx_entities::PokemonCreate)
//! - [`Loader`] — Get-or-create of shared entities, idempotent Pokémon insertion
//! - [`Pipeline`] — Sequential fetch → transform → load over an ID range
//!
//! ## Failures
//!
//! - [`Failure`] — Fetch, validation or storage failure of a single ID
mod error;
#[cfg(any(test, feature = "fixtures"))]
mod fixtures;
mod load;
mod pipeline;
mod pokeapi;
mod source;
mod transform;

pub use error::*;
#[cfg(any(test, feature = "fixtures"))]
pub use fixtures::*;
pub use load::*;
pub use pipeline::*;
pub use pokeapi::*;
pub use source::*;
pub use transform::*;
