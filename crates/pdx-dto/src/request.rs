use pdx_core::*;
use serde::Deserialize;
use serde::Serialize;

fn start_id() -> i32 {
    DEFAULT_START_ID
}
fn end_id() -> i32 {
    DEFAULT_END_ID
}
fn skip() -> i64 {
    DEFAULT_SKIP
}
fn limit() -> i64 {
    DEFAULT_LIMIT
}

/// Inclusive upstream ID range of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPipeline {
    #[serde(default = "start_id")]
    pub start_id: i32,
    #[serde(default = "end_id")]
    pub end_id: i32,
}

impl Default for RunPipeline {
    fn default() -> Self {
        Self {
            start_id: DEFAULT_START_ID,
            end_id: DEFAULT_END_ID,
        }
    }
}

/// Pagination and filtering of the Pokémon listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPokemon {
    #[serde(default = "skip")]
    pub skip: i64,
    #[serde(default = "limit")]
    pub limit: i64,
    #[serde(default)]
    pub type_filter: Option<String>,
}

impl Default for ListPokemon {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
            type_filter: None,
        }
    }
}

impl ListPokemon {
    /// Rejects negative offsets and page sizes.
    pub fn validate(&self) -> Result<(), &'static str> {
        match (self.skip < 0, self.limit < 0) {
            (true, _) => Err("skip must be non-negative"),
            (_, true) => Err("limit must be non-negative"),
            _ => Ok(()),
        }
    }
    /// Empty filters behave like no filter at all.
    pub fn kind(&self) -> Option<&str> {
        self.type_filter.as_deref().filter(|s| !s.is_empty())
    }
}
