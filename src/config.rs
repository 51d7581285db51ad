//! Explorer configuration
//!
//! City → data file mapping plus the month/day vocabularies offered by the
//! prompts. Loaded from TOML; every field has a built-in default so a
//! missing config file is not an error.
//!
//! Resolution priority:
//! 1. `--config <path>` flag
//! 2. `$BIKESHARE_CONFIG`
//! 3. `./bikeshare.toml` (only if it exists)
//! 4. Built-in defaults

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "BIKESHARE_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "bikeshare.toml";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// One selectable city and its data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityConfig {
    /// Normalized prompt token (e.g. "new york")
    pub key: String,
    /// CSV file name, relative to `data_dir` unless absolute
    pub file: String,
    /// Whether the file carries Gender and Birth Year columns
    #[serde(default = "default_demographics")]
    pub demographics: bool,
}

fn default_demographics() -> bool {
    true
}

impl CityConfig {
    pub fn new(key: &str, file: &str, demographics: bool) -> Self {
        Self {
            key: key.to_string(),
            file: file.to_string(),
            demographics,
        }
    }

    /// Title-cased key for messages ("new york" → "New York")
    pub fn display_name(&self) -> String {
        self.key
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Explorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the city CSV files
    pub data_dir: PathBuf,
    /// Rows per preview page
    pub page_size: usize,
    /// Selectable cities, in prompt order
    pub cities: Vec<CityConfig>,
    /// Month names offered by the month prompt
    pub months: Vec<String>,
    /// Weekday names; the day prompt's digit `k` selects `days[k - 1]`
    pub days: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: 5,
            cities: vec![
                CityConfig::new("chicago", "chicago.csv", true),
                CityConfig::new("new york", "new_york_city.csv", true),
                CityConfig::new("washington", "washington.csv", false),
            ],
            months: ["january", "february", "march", "april", "may", "june"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            days: [
                "sunday",
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
            ]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate config text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the active config (see module docs for priority)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }

        tracing::debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Check vocabularies and city table
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(ConfigError::Invalid("at least one city is required".into()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }

        let mut keys = HashSet::new();
        for city in &self.cities {
            if city.key.trim().is_empty() {
                return Err(ConfigError::Invalid("city key must not be empty".into()));
            }
            if crate::prompt::normalize(&city.key) != city.key {
                return Err(ConfigError::Invalid(format!(
                    "city key '{}' must be lowercase letters and spaces",
                    city.key
                )));
            }
            if !keys.insert(city.key.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate city key '{}'",
                    city.key
                )));
            }
        }

        if self.months.is_empty() {
            return Err(ConfigError::Invalid("at least one month is required".into()));
        }
        for name in &self.months {
            if parse_month(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown month '{}'", name)));
            }
        }

        let mut seen = HashSet::new();
        for name in &self.days {
            let weekday = parse_weekday(name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown weekday '{}'", name)))?;
            seen.insert(weekday);
        }
        if self.days.len() != 7 || seen.len() != 7 {
            return Err(ConfigError::Invalid(
                "days must list all seven weekdays exactly once".into(),
            ));
        }

        Ok(())
    }

    /// Look up a city by its key
    pub fn city(&self, key: &str) -> Option<&CityConfig> {
        self.cities.iter().find(|c| c.key == key)
    }

    /// Full path of a city's data file
    pub fn city_path(&self, city: &CityConfig) -> PathBuf {
        let file = Path::new(&city.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn city_tokens(&self) -> Vec<String> {
        self.cities.iter().map(|c| c.key.clone()).collect()
    }

    pub fn month_tokens(&self) -> Vec<String> {
        self.months.iter().map(|m| m.to_lowercase()).collect()
    }

    /// Digits "1".."7" followed by the weekday names
    pub fn day_tokens(&self) -> Vec<String> {
        (1..=self.days.len())
            .map(|i| i.to_string())
            .chain(self.days.iter().map(|d| d.to_lowercase()))
            .collect()
    }

    /// Calendar month for an accepted month token
    pub fn month_for(&self, token: &str) -> Option<Month> {
        self.months
            .iter()
            .find(|m| m.eq_ignore_ascii_case(token))
            .and_then(|m| parse_month(m))
    }

    /// Weekday for an accepted day token: digit `k` → `days[k - 1]`, or a name
    pub fn weekday_for(&self, token: &str) -> Option<Weekday> {
        if let Ok(k) = token.parse::<usize>() {
            let index = k.checked_sub(1)?;
            return self.days.get(index).and_then(|d| parse_weekday(d));
        }
        self.days
            .iter()
            .find(|d| d.eq_ignore_ascii_case(token))
            .and_then(|d| parse_weekday(d))
    }
}

fn parse_month(name: &str) -> Option<Month> {
    name.parse::<Month>().ok()
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    name.parse::<Weekday>().ok()
}

/// Full English weekday name
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
