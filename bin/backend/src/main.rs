//! Pokedex Backend Binary
//!
//! Serves stored Pokémon and triggers pipeline runs over HTTP.
//! Runs on BIND_ADDR (default 0.0.0.0:8000) against DB_URL.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pdx_core::log();
    pdx_core::kys();
    pdx_server::run(pdx_core::Settings::from_env()).await
}
