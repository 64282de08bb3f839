use pdx_pipeline::*;
use pdx_store::*;
use std::sync::Arc;

/// Shared state behind every handler: the storage handle and the pipeline
/// that writes into it.
pub struct API {
    store: Arc<dyn Store>,
    pipeline: Pipeline<Arc<dyn Store>, Arc<dyn Source>>,
}

impl API {
    pub fn new(store: Arc<dyn Store>, source: Arc<dyn Source>) -> Self {
        Self {
            pipeline: Pipeline::new(source, store.clone()),
            store,
        }
    }
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
    pub fn pipeline(&self) -> &Pipeline<Arc<dyn Store>, Arc<dyn Source>> {
        &self.pipeline
    }
}
