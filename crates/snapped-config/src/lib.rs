pub mod config;

pub use config::{ApiConfig, CropConfig, DEFAULT_API_BASE_URL, ResultsLayoutConfig};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const APP_DIR: &str = "snapped";
const CONFIG_FILE: &str = "config.json";

/// Overrides `api.base_url` when set.
pub const BASE_URL_ENV: &str = "SNAPPED_API_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which results are shown, by seller kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResultFilter {
    #[default]
    All,
    New,
    PreOwned,
}

impl ResultFilter {
    pub const ALL: &'static [Self] = &[Self::All, Self::New, Self::PreOwned];
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFilter::All => write!(f, "All"),
            ResultFilter::New => write!(f, "New"),
            ResultFilter::PreOwned => write!(f, "Pre-Owned"),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ResultFilter::All),
            "new" => Ok(ResultFilter::New),
            "pre-owned" | "preowned" | "used" => Ok(ResultFilter::PreOwned),
            other => Err(ConfigError::Invalid(format!("unknown filter '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: &'static [Self] = &[Self::Ascending, Self::Descending];

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "Ascending"),
            SortOrder::Descending => write!(f, "Descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(ConfigError::Invalid(format!("unknown sort order '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappedConfig {
    pub api: ApiConfig,
    pub crop: CropConfig,
    pub results: ResultsLayoutConfig,
}

impl SnappedConfig {
    /// Load from the user config dir, falling back to defaults when no file
    /// exists, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => {
                tracing::debug!("No config directory, using defaults");
                Self::default()
            }
        };

        cfg.apply_overrides(|key| std::env::var(key).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let cfg = serde_json::from_str(&contents)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            tracing::debug!("API base URL overridden from {BASE_URL_ENV}");
            self.api.base_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("API base URL cannot be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("API timeout must be positive".to_string()));
        }

        let results = &self.results;
        if !(results.collapse_distance > 0.0 && results.collapse_distance.is_finite()) {
            return Err(ConfigError::Invalid(
                "Collapse distance must be positive".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&results.grow_start_fraction)
            || results.grow_end_fraction > 1.0
            || results.grow_end_fraction <= results.grow_start_fraction
        {
            return Err(ConfigError::Invalid(
                "Card grow window must satisfy 0 <= start < end <= 1".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = SnappedConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.api.timeout_secs, 60);
        assert_eq!(cfg.results.collapse_distance, 250.0);
    }

    #[test]
    fn test_base_url_override() {
        let mut cfg = SnappedConfig::default();
        cfg.apply_overrides(|key| {
            (key == BASE_URL_ENV).then(|| " http://localhost:8000/api/v1 ".to_string())
        });
        assert_eq!(cfg.api.base_url, "http://localhost:8000/api/v1");

        // Blank values are ignored
        cfg.apply_overrides(|_| Some("   ".to_string()));
        assert_eq!(cfg.api.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_validation() {
        let mut cfg = SnappedConfig::default();
        cfg.results.collapse_distance = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = SnappedConfig::default();
        cfg.results.grow_start_fraction = 0.9;
        assert!(cfg.validate().is_err());

        let mut cfg = SnappedConfig::default();
        cfg.api.base_url = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Pre-Owned".parse::<ResultFilter>().unwrap(), ResultFilter::PreOwned);
        assert_eq!("new".parse::<ResultFilter>().unwrap(), ResultFilter::New);
        assert!("refurbished".parse::<ResultFilter>().is_err());
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn test_display() {
        assert_eq!(ResultFilter::PreOwned.to_string(), "Pre-Owned");
        assert_eq!(SortOrder::Ascending.to_string(), "Ascending");
    }
}
