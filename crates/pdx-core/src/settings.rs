use std::time::Duration;

/// Upstream PokeAPI root used when `POKEAPI_URL` is unset.
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
/// Listen address used when `BIND_ADDR` is unset.
pub const BIND_ADDR: &str = "0.0.0.0:8000";
/// Browser origin allowed by CORS when `CORS_ORIGIN` is unset.
pub const CORS_ORIGIN: &str = "http://localhost:3000";
/// Upstream request timeout used when `FETCH_TIMEOUT` is unset or malformed.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration gathered from the environment.
///
/// Every field except the database URL has a default; the database URL is
/// only required by the PostgreSQL store, so it stays optional here and is
/// checked where the connection is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_url: Option<String>,
    pub bind_addr: String,
    pub pokeapi_url: String,
    pub cors_origin: String,
    pub fetch_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: None,
            bind_addr: BIND_ADDR.to_string(),
            pokeapi_url: POKEAPI_URL.to_string(),
            cors_origin: CORS_ORIGIN.to_string(),
            fetch_timeout: FETCH_TIMEOUT,
        }
    }
}

impl Settings {
    /// Reads `DB_URL`, `BIND_ADDR`, `POKEAPI_URL`, `CORS_ORIGIN` and
    /// `FETCH_TIMEOUT`, after loading any `.env` file.
    pub fn from_env() -> Self {
        crate::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            db_url: var("DB_URL"),
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            pokeapi_url: var("POKEAPI_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.pokeapi_url),
            cors_origin: var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            fetch_timeout: match var("FETCH_TIMEOUT") {
                None => defaults.fetch_timeout,
                Some(s) => crate::parse_duration(&s).unwrap_or_else(|| {
                    log::warn!("invalid FETCH_TIMEOUT {:?}, using default", s);
                    defaults.fetch_timeout
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pokeapi_url, "https://pokeapi.co/api/v2");
        assert!(settings.db_url.is_none());
    }
    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            ("DB_URL", "postgres://localhost/pokedex"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("POKEAPI_URL", "http://mirror.local/api/v2/"),
            ("FETCH_TIMEOUT", "5s"),
        ]));
        assert_eq!(settings.db_url.as_deref(), Some("postgres://localhost/pokedex"));
        assert_eq!(settings.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.pokeapi_url, "http://mirror.local/api/v2");
        assert_eq!(settings.fetch_timeout, Duration::from_secs(5));
        assert_eq!(settings.cors_origin, CORS_ORIGIN);
    }
    #[test]
    fn blank_or_malformed_values_fall_back() {
        let settings = Settings::from_lookup(lookup(&[
            ("DB_URL", "   "),
            ("FETCH_TIMEOUT", "soon"),
        ]));
        assert!(settings.db_url.is_none());
        assert_eq!(settings.fetch_timeout, FETCH_TIMEOUT);
    }
}
