//! Pokedex ETL Binary
//!
//! Runs the pipeline once over an ID range and prints the tally as JSON.

use clap::Parser;
use pdx_core::*;
use pdx_pipeline::*;
use pdx_store::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Load a range of PokeAPI records into the pokedex store", long_about = None)]
struct Args {
    /// First upstream identifier to fetch
    #[arg(long, default_value_t = DEFAULT_START_ID)]
    start: i32,
    /// Last upstream identifier to fetch (inclusive)
    #[arg(long, default_value_t = DEFAULT_END_ID)]
    end: i32,
    /// Load into an in-memory store instead of DB_URL; nothing is persisted
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let settings = Settings::from_env();
    let store: Arc<dyn Store> = match args.memory {
        true => Arc::new(Memory::new()),
        false => Arc::new(Postgres::connect(settings.db_url.as_deref()).await?),
    };
    store.migrate().await?;
    let source = PokeApi::from_settings(&settings)?;
    let tally = Pipeline::new(source, store).run(args.start, args.end).await;
    println!("{}", serde_json::to_string(&tally)?);
    Ok(())
}
