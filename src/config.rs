//! Configuration loading and validation.
//!
//! tzclock reads `tzclock.toml` from the XDG config directory, or from a
//! `--config-dir` override. When no file exists a commented default is
//! written first. All fields are optional in the file; defaults come from
//! `constants`. Validation runs on every load and rejects unparseable zones
//! and out-of-range refresh intervals with actionable messages.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_PRIMARY_ZONE, DEFAULT_SECONDARY_ZONE, DEFAULT_TICK_INTERVAL_SECS, DEFAULT_USE_12_HOUR,
    MAXIMUM_TICK_INTERVAL_SECS, MINIMUM_TICK_INTERVAL_SECS,
};

const DEFAULT_CONFIG_CONTENT: &str = r#"#[Zones]
primary_zone = "Europe/London"       # IANA timezone shown first
secondary_zone = "Australia/Sydney"  # IANA timezone shown second

#[Display]
use_12_hour = true       # Render clocks on the 12-hour dial
tick_interval_secs = 1   # Live clock refresh interval in seconds (1-60)
"#;

/// Application configuration. Fields mirror `tzclock.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub primary_zone: Option<String>,
    pub secondary_zone: Option<String>,
    pub tick_interval_secs: Option<u64>,
    pub use_12_hour: Option<bool>,
}

impl Config {
    /// Load the configuration, creating the default file if none exists.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let path = Self::config_path(config_dir)?;
        if !path.exists() {
            Self::write_default(&path)?;
            log_block_start!("Created default configuration at {}", path.display());
        }
        Self::load_from_path(&path)
    }

    /// Load and validate a configuration file at an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse configuration at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration file path.
    pub fn config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .context("could not determine the user configuration directory")?
                .join("tzclock"),
        };
        Ok(dir.join("tzclock.toml"))
    }

    fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create configuration directory {}", parent.display())
            })?;
        }
        std::fs::write(path, DEFAULT_CONFIG_CONTENT)
            .with_context(|| format!("failed to write default configuration to {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        crate::zoned_time::parse_zone(self.primary_zone())
            .with_context(|| format!("invalid primary_zone {:?}", self.primary_zone()))?;
        crate::zoned_time::parse_zone(self.secondary_zone())
            .with_context(|| format!("invalid secondary_zone {:?}", self.secondary_zone()))?;

        let tick = self.tick_interval_secs();
        if !(MINIMUM_TICK_INTERVAL_SECS..=MAXIMUM_TICK_INTERVAL_SECS).contains(&tick) {
            bail!(
                "tick_interval_secs must be between {MINIMUM_TICK_INTERVAL_SECS} and \
                 {MAXIMUM_TICK_INTERVAL_SECS} seconds (got {tick})"
            );
        }
        Ok(())
    }

    pub fn primary_zone(&self) -> &str {
        self.primary_zone.as_deref().unwrap_or(DEFAULT_PRIMARY_ZONE)
    }

    pub fn secondary_zone(&self) -> &str {
        self.secondary_zone
            .as_deref()
            .unwrap_or(DEFAULT_SECONDARY_ZONE)
    }

    pub fn tick_interval_secs(&self) -> u64 {
        self.tick_interval_secs
            .unwrap_or(DEFAULT_TICK_INTERVAL_SECS)
    }

    pub fn use_12_hour(&self) -> bool {
        self.use_12_hour.unwrap_or(DEFAULT_USE_12_HOUR)
    }

    /// Log the active configuration.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Primary zone: {}", self.primary_zone());
        log_indented!("Secondary zone: {}", self.secondary_zone());
        log_indented!("Tick interval: {}s", self.tick_interval_secs());
        log_indented!(
            "Clock dial: {}",
            if self.use_12_hour() { "12-hour" } else { "24-hour" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Log;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("tzclock.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.primary_zone(), "Europe/London");
        assert_eq!(config.secondary_zone(), "Australia/Sydney");
        assert_eq!(config.tick_interval_secs(), 1);
        assert!(config.use_12_hour());
    }

    #[test]
    fn overrides_are_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "primary_zone = \"Asia/Tokyo\"\n\
             secondary_zone = \"America/New_York\"\n\
             tick_interval_secs = 5\n\
             use_12_hour = false\n",
        );
        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.primary_zone(), "Asia/Tokyo");
        assert_eq!(config.secondary_zone(), "America/New_York");
        assert_eq!(config.tick_interval_secs(), 5);
        assert!(!config.use_12_hour());
    }

    #[test]
    fn missing_file_creates_the_default() {
        Log::set_enabled(false);
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path())).unwrap();
        Log::set_enabled(true);

        assert!(dir.path().join("tzclock.toml").exists());
        assert_eq!(config.primary_zone(), "Europe/London");
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "primary_zone = \"Mars/Olympus_Mons\"\n");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("primary_zone"));
    }

    #[test]
    fn out_of_range_tick_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "tick_interval_secs = 0\n");
        assert!(Config::load_from_path(&path).is_err());

        let path = write_config(dir.path(), "tick_interval_secs = 3600\n");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "primary_zone = [not toml");
        assert!(Config::load_from_path(&path).is_err());
    }
}
