//! PostgreSQL integration for the pokedex store.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`create`] — Applies a [`Schema`] to a live connection
//!
//! ## Table Names
//!
//! Constants for the four entity tables and the two join tables.
mod schema;

pub use schema::*;

use tokio_postgres::Client;

/// Establishes a database connection.
///
/// The connection task is spawned onto the current tokio runtime; the
/// returned client is usable until that task ends.
pub async fn db(url: &str) -> Result<Client, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for Pokémon rows.
#[rustfmt::skip]
pub const POKEMON:           &str = "pokemon";
/// Table for shared type names.
#[rustfmt::skip]
pub const TYPES:             &str = "types";
/// Table for shared ability names.
#[rustfmt::skip]
pub const ABILITIES:         &str = "abilities";
/// Table for per-Pokémon base stats.
#[rustfmt::skip]
pub const STATS:             &str = "stats";
/// Join table linking Pokémon to types.
#[rustfmt::skip]
pub const POKEMON_TYPES:     &str = "pokemon_types";
/// Join table linking Pokémon to abilities.
#[rustfmt::skip]
pub const POKEMON_ABILITIES: &str = "pokemon_abilities";
