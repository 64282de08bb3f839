use super::*;
use std::sync::Arc;

/// Source defines where raw Pokémon records come from.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Returns the raw JSON record for one upstream identifier.
    async fn fetch(&self, id: i32) -> Result<serde_json::Value, FetchError>;
}

#[async_trait::async_trait]
impl<F> Source for Arc<F>
where
    F: Source + ?Sized,
{
    async fn fetch(&self, id: i32) -> Result<serde_json::Value, FetchError> {
        self.as_ref().fetch(id).await
    }
}
