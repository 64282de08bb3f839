use super::*;
use pdx_core::Settings;
use std::time::Duration;

/// PokeAPI client fetching `GET {base}/pokemon/{id}`.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base: String,
}

impl PokeApi {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(&settings.pokeapi_url, settings.fetch_timeout)
    }
    pub fn url(&self, id: i32) -> String {
        format!("{}/pokemon/{}", self.base, id)
    }
}

#[async_trait::async_trait]
impl Source for PokeApi {
    async fn fetch(&self, id: i32) -> Result<serde_json::Value, FetchError> {
        let ref url = self.url(id);
        log::debug!("fetching {}", url);
        let response = self.client.get(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            reqwest::StatusCode::NOT_FOUND => Err(FetchError::NotFound(id)),
            status => Err(FetchError::Status(id, status.as_u16())),
        }
    }
}
