//! Normalized entity graph for stored Pokémon.
//!
//! ## Entities
//!
//! - [`Pokemon`] — A stored Pokémon with its linked types, abilities and stats
//! - [`Type`] — Shared type name, referenced by many Pokémon
//! - [`Ability`] — Shared ability name, referenced by many Pokémon
//! - [`Stat`] — Base stat owned by exactly one Pokémon
//!
//! ## Creation Shapes
//!
//! - [`PokemonCreate`] — Normalized request to create one Pokémon
//! - [`StatCreate`] — One stat line inside a [`PokemonCreate`]
//!
//! ## Join Tables
//!
//! - [`PokemonType`] and [`PokemonAbility`] describe the many-to-many links.
mod ability;
mod create;
mod links;
mod pokemon;
mod stat;
mod types;

pub use ability::*;
pub use create::*;
pub use links::*;
pub use pokemon::*;
pub use stat::*;
pub use types::*;
