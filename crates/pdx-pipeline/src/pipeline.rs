use super::*;
use pdx_entities::Pokemon;
use pdx_store::Store;
use tokio::sync::Mutex;

/// Outcome counts of one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tally {
    pub successful: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}

/// Sequential fetch → transform → load over an inclusive ID range.
///
/// Runs never overlap: a second caller waits until the first finishes.
pub struct Pipeline<S, F> {
    source: F,
    loader: Loader<S>,
    running: Mutex<()>,
}

impl<S, F> Pipeline<S, F>
where
    S: Store,
    F: Source,
{
    pub fn new(source: F, store: S) -> Self {
        Self {
            source,
            loader: Loader::from(store),
            running: Mutex::new(()),
        }
    }
    pub fn loader(&self) -> &Loader<S> {
        &self.loader
    }

    /// Processes every ID of `[start, end]` in ascending order. A failed ID
    /// is logged and counted; it never stops the run.
    pub async fn run(&self, start: i32, end: i32) -> Tally {
        let _guard = self.running.lock().await;
        log::info!("starting pokemon pipeline for ids {} to {}", start, end);
        let mut tally = Tally::default();
        for id in start..=end {
            match self.step(id).await {
                Ok(_) => tally.successful += 1,
                Err(e) => {
                    log::log!(e.level(), "skipping pokemon {}: {}", id, e);
                    tally.failed += 1;
                }
            }
        }
        log::info!(
            "pipeline completed. successful: {}, failed: {}",
            tally.successful,
            tally.failed
        );
        match self.loader.store().census().await {
            Ok(census) => census.log(),
            Err(e) => log::warn!("could not count stored rows: {}", e),
        }
        tally
    }

    /// Extract, transform and load a single upstream identifier.
    pub async fn step(&self, id: i32) -> Result<Pokemon, Failure> {
        let ref raw = self.source.fetch(id).await?;
        let ref data = transform(raw)?;
        Ok(self.loader.load_pokemon(data).await?)
    }
}
