//! Core identities, constants, and runtime utilities for the pokedex pipeline.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the pokedex workspace.
mod settings;

pub use settings::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for persisted entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over the
/// integer primary keys generated by storage.
pub struct ID<T> {
    inner: i32,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> i32 {
        self.inner
    }
}

impl<T> From<ID<T>> for i32 {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<i32> for ID<T> {
    fn from(inner: i32) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// IDs travel over the wire as bare integers.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.inner)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// PIPELINE PARAMETERS
// ============================================================================
/// First upstream identifier fetched when a run does not name one.
pub const DEFAULT_START_ID: i32 = 1;
/// Last upstream identifier (inclusive) fetched when a run does not name one.
pub const DEFAULT_END_ID: i32 = 20;

// ============================================================================
// LISTING PARAMETERS
// ============================================================================
/// Rows skipped by a listing that does not paginate.
pub const DEFAULT_SKIP: i64 = 0;
/// Page size of a listing that does not paginate.
pub const DEFAULT_LIMIT: i64 = 20;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::create_dir_all("logs")
        .and_then(|_| std::fs::File::create(format!("logs/{}.log", time)))
        .map(|file| simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file));
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = match file {
        Ok(file) => vec![term, file],
        Err(_) => vec![term],
    };
    if simplelog::CombinedLogger::init(loggers).is_err() {
        eprintln!("logger already initialized");
    }
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// A pipeline run has no cancellation point, so an interrupt abandons it.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Load a `.env` file from the working directory, if one exists.
pub fn dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring malformed .env file: {}", e),
    }
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
