use super::*;
use std::collections::BTreeMap;

/// Source serving records held in memory, keyed by upstream identifier.
///
/// Identifiers without a record answer [`FetchError::NotFound`], the same
/// way the upstream answers for identifiers it does not know.
#[derive(Debug, Clone, Default)]
pub struct Fixtures(BTreeMap<i32, serde_json::Value>);

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, id: i32, record: serde_json::Value) -> Self {
        self.0.insert(id, record);
        self
    }
}

impl FromIterator<(i32, serde_json::Value)> for Fixtures {
    fn from_iter<I: IntoIterator<Item = (i32, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl Source for Fixtures {
    async fn fetch(&self, id: i32) -> Result<serde_json::Value, FetchError> {
        self.0.get(&id).cloned().ok_or(FetchError::NotFound(id))
    }
}
