use std::env;
use std::path::PathBuf;

const DEFAULT_FETCH_PARALLELISM: usize = 6;

/// Runtime settings. Treated as a value: nothing mutates a shared instance,
/// `refresh` and the `with_*` helpers return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub json_path: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub cache_enabled: bool,
    pub fetch_parallelism: usize,
    pub show_inactive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            json_path: None,
            db_path: None,
            cache_enabled: true,
            fetch_parallelism: DEFAULT_FETCH_PARALLELISM,
            show_inactive: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            json_path: opt_path(lookup("MANAGER_STATS_JSON")),
            db_path: opt_path(lookup("MANAGER_STATS_DB")),
            cache_enabled: lookup("STATS_CACHE")
                .and_then(|val| parse_flag(&val))
                .unwrap_or(defaults.cache_enabled),
            fetch_parallelism: lookup("FETCH_PARALLELISM")
                .and_then(|val| val.trim().parse::<usize>().ok())
                .unwrap_or(defaults.fetch_parallelism)
                .clamp(2, 32),
            show_inactive: lookup("ROSTER_SHOW_INACTIVE")
                .and_then(|val| parse_flag(&val))
                .unwrap_or(defaults.show_inactive),
        }
    }

    /// Re-read the environment. Explicit overrides made through `with_*` are
    /// not carried over.
    pub fn refresh(&self) -> Self {
        Self::from_env()
    }

    pub fn with_show_inactive(&self, show_inactive: bool) -> Self {
        Self {
            show_inactive,
            ..self.clone()
        }
    }

    pub fn with_cache_enabled(&self, cache_enabled: bool) -> Self {
        Self {
            cache_enabled,
            ..self.clone()
        }
    }
}

fn opt_path(raw: Option<String>) -> Option<PathBuf> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
