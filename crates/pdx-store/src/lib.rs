//! Storage handle for the normalized Pokémon graph.
//!
//! The pipeline and the HTTP handlers receive a [`Store`] explicitly rather
//! than reaching for a global session.
//!
//! ## Core Types
//!
//! - [`Store`] — Async trait covering every read and write the system needs
//! - [`Postgres`] — PostgreSQL-backed store, one transaction per Pokémon
//! - [`Memory`] — In-process store with the same semantics, for dry runs and tests
//! - [`Census`] — Row counts per table
//! - [`StoreError`] — Failures raised by a store
mod census;
mod error;
mod memory;
mod postgres;
mod store;

pub use census::*;
pub use error::*;
pub use memory::*;
pub use postgres::*;
pub use store::*;
