//! Data transfer objects for the pokedex HTTP API.
mod request;
mod response;

pub use request::*;
pub use response::*;
