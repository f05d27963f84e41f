// Rust guideline compliant 2026-10-12

//! Configuration management for Majani.

use crate::{Coordinate, Error, ListingLimits, Locale, Result, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Majani behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Origin used for distances when no live position is supplied.
    #[serde(default = "default_origin")]
    pub default_origin: Coordinate,

    /// Display locale.
    #[serde(default)]
    pub locale: Locale,

    /// Sort order applied when a query does not specify one.
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Maximum number of images per listing.
    #[serde(default = "default_max_images")]
    pub max_images: usize,

    /// Maximum listing title length in characters.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,

    /// Lifetime of a one-time login code, in seconds.
    #[serde(default = "default_otp_ttl_secs")]
    pub otp_ttl_secs: u64,

    /// Failed verifications after which a live code stops being reissued.
    #[serde(default = "default_otp_max_attempts")]
    pub otp_max_attempts: u32,

    /// Number of entries kept in the recently viewed history.
    #[serde(default = "default_recent_views_limit")]
    pub recent_views_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Central Tehran, the fallback when no position is known.
fn default_origin() -> Coordinate {
    Coordinate::new(35.6892, 51.3890)
}

fn default_max_images() -> usize {
    ListingLimits::default().max_images
}

fn default_max_title_len() -> usize {
    ListingLimits::default().max_title_len
}

fn default_otp_ttl_secs() -> u64 {
    120
}

fn default_otp_max_attempts() -> u32 {
    3
}

fn default_recent_views_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_origin: default_origin(),
            locale: Locale::default(),
            default_sort: SortOrder::default(),
            max_images: default_max_images(),
            max_title_len: default_max_title_len(),
            otp_ttl_secs: default_otp_ttl_secs(),
            otp_max_attempts: default_otp_max_attempts(),
            recent_views_limit: default_recent_views_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.majani/config.toml`
    /// 3. Environment variables with `MAJANI_` prefix
    ///
    /// # Arguments
    ///
    /// * `majani_dir` - Path to the `.majani` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(majani_dir: &Path) -> Result<Self> {
        Self::load_with(majani_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(majani_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = majani_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment overrides.
    ///
    /// Supported variables:
    /// - `MAJANI_DEFAULT_LAT` / `MAJANI_DEFAULT_LON` - Fallback origin
    /// - `MAJANI_LOCALE` - Display locale (fa/en)
    /// - `MAJANI_DEFAULT_SORT` - recency or proximity
    /// - `MAJANI_MAX_IMAGES` - Image limit per listing
    /// - `MAJANI_OUTPUT_FORMAT` - json/table/plain
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("MAJANI_DEFAULT_LAT") {
            self.default_origin.lat = val.trim().parse().map_err(|_| {
                Error::Config("MAJANI_DEFAULT_LAT must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("MAJANI_DEFAULT_LON") {
            self.default_origin.lon = val.trim().parse().map_err(|_| {
                Error::Config("MAJANI_DEFAULT_LON must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("MAJANI_LOCALE") {
            self.locale = val.trim().parse()?;
        }

        if let Some(val) = lookup("MAJANI_DEFAULT_SORT") {
            self.default_sort = match val.trim() {
                "recency" => SortOrder::Recency,
                "proximity" => SortOrder::Proximity,
                _ => {
                    return Err(Error::Config(
                        "MAJANI_DEFAULT_SORT must be recency or proximity".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("MAJANI_MAX_IMAGES") {
            self.max_images = val.trim().parse().map_err(|_| {
                Error::Config("MAJANI_MAX_IMAGES must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("MAJANI_OUTPUT_FORMAT") {
            self.output_format = match val.trim() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "MAJANI_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<()> {
        self.default_origin
            .validate()
            .map_err(|e| Error::Config(format!("default_origin: {}", e)))?;

        if self.max_images == 0 {
            return Err(Error::Config(
                "max_images must be greater than 0".to_string(),
            ));
        }

        if self.max_title_len == 0 {
            return Err(Error::Config(
                "max_title_len must be greater than 0".to_string(),
            ));
        }

        if self.otp_ttl_secs == 0 {
            return Err(Error::Config(
                "otp_ttl_secs must be greater than 0".to_string(),
            ));
        }

        if self.otp_max_attempts == 0 {
            return Err(Error::Config(
                "otp_max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Posting limits derived from this configuration.
    pub fn limits(&self) -> ListingLimits {
        ListingLimits {
            max_title_len: self.max_title_len,
            max_images: self.max_images,
        }
    }

    /// Saves the configuration to `config.toml` in `majani_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, majani_dir: &Path) -> Result<()> {
        let config_path = majani_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_origin, Coordinate::new(35.6892, 51.3890));
        assert_eq!(config.locale, Locale::Fa);
        assert_eq!(config.default_sort, SortOrder::Recency);
        assert_eq!(config.max_images, 8);
        assert_eq!(config.otp_ttl_secs, 120);
        assert_eq!(config.recent_views_limit, 20);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
locale = "en"
default_sort = "proximity"
max_images = 4
output_format = "json"

[default_origin]
lat = 32.6546
lon = 51.6680
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.default_sort, SortOrder::Proximity);
        assert_eq!(config.max_images, 4);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_origin, Coordinate::new(32.6546, 51.6680));
        assert_eq!(config.max_title_len, 80);
    }

    #[test]
    fn test_config_validation_zero_images() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "max_images = 0").unwrap();
        assert!(Config::load_with(temp_dir.path(), no_env).is_err());
    }

    #[test]
    fn test_config_validation_zero_otp_attempts() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "otp_max_attempts = 0").unwrap();
        let err = Config::load_with(temp_dir.path(), no_env).unwrap_err();
        assert!(err.to_string().contains("otp_max_attempts"));

        std::fs::write(temp_dir.path().join("config.toml"), "otp_max_attempts = 1").unwrap();
        assert_eq!(
            Config::load_with(temp_dir.path(), no_env).unwrap().otp_max_attempts,
            1
        );
    }

    #[test]
    fn test_config_validation_origin_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let lookup = env(&[("MAJANI_DEFAULT_LAT", "95.0")]);
        assert!(Config::load_with(temp_dir.path(), lookup).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let lookup = env(&[
            ("MAJANI_DEFAULT_LAT", "29.5918"),
            ("MAJANI_DEFAULT_LON", "52.5837"),
            ("MAJANI_LOCALE", "en"),
            ("MAJANI_DEFAULT_SORT", "proximity"),
            ("MAJANI_MAX_IMAGES", "3"),
            ("MAJANI_OUTPUT_FORMAT", "plain"),
        ]);
        let config = Config::load_with(temp_dir.path(), lookup).unwrap();
        assert_eq!(config.default_origin, Coordinate::new(29.5918, 52.5837));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.default_sort, SortOrder::Proximity);
        assert_eq!(config.max_images, 3);
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_env_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        for (key, value) in [
            ("MAJANI_DEFAULT_LAT", "north"),
            ("MAJANI_LOCALE", "de"),
            ("MAJANI_DEFAULT_SORT", "random"),
            ("MAJANI_MAX_IMAGES", "-1"),
            ("MAJANI_OUTPUT_FORMAT", "xml"),
        ] {
            let result = Config::load_with(temp_dir.path(), env(&[(key, value)]));
            assert!(result.is_err(), "{key}={value} should be rejected");
        }
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "locale = \"en\"").unwrap();
        let config =
            Config::load_with(temp_dir.path(), env(&[("MAJANI_LOCALE", "fa")])).unwrap();
        assert_eq!(config.locale, Locale::Fa);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let original = Config {
            locale: Locale::En,
            default_sort: SortOrder::Proximity,
            max_title_len: 60,
            ..Config::default()
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_limits_follow_config() {
        let config = Config {
            max_images: 2,
            max_title_len: 10,
            ..Config::default()
        };
        assert_eq!(
            config.limits(),
            ListingLimits {
                max_title_len: 10,
                max_images: 2
            }
        );
    }
}
