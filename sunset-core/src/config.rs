use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{client::SolarTimeClient, model::Location};

/// Settings stored on disk for the `sunset` CLI.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.sunrise-sunset.org/json"
///
/// [default_location]
/// latitude = 52.52
/// longitude = 13.405
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Location used when no coordinates are given on the command line.
    pub default_location: Option<Location>,

    /// Optional endpoint override; the public API is used when absent.
    pub base_url: Option<String>,
}

impl Config {
    pub fn default_location(&self) -> Result<Location> {
        self.default_location.ok_or_else(|| {
            anyhow!(
                "No location given and no default location configured.\n\
                 Hint: pass LATITUDE LONGITUDE or run `sunset configure` first."
            )
        })
    }

    pub fn set_default_location(&mut self, location: Location) {
        self.default_location = Some(location);
    }

    /// Build a client honouring `base_url`.
    pub fn client(&self) -> SolarTimeClient {
        let client = SolarTimeClient::new();
        match &self.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "sunset", "sunset-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::BASE_URL;

    #[test]
    fn default_location_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_location().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("no default location configured"));
        assert!(msg.contains("Hint: pass LATITUDE LONGITUDE"));
    }

    #[test]
    fn set_default_location_replaces_previous() {
        let mut cfg = Config::default();

        cfg.set_default_location(Location::new(52.52, 13.405));
        cfg.set_default_location(Location::new(-33.87, 151.21));

        let loc = cfg.default_location().expect("default location must exist");
        assert_eq!(loc, Location::new(-33.87, 151.21));
    }

    #[test]
    fn parses_toml_with_location_table() {
        let cfg = Config::from_toml(
            r#"
            base_url = "http://localhost:9000/json"

            [default_location]
            latitude = 52.52
            longitude = -13.405
            "#,
        )
        .unwrap();

        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:9000/json"));
        assert_eq!(cfg.default_location, Some(Location::new(52.52, -13.405)));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn rejects_incomplete_location() {
        assert!(Config::from_toml("[default_location]\nlatitude = 1.0\n").is_err());
    }

    #[test]
    fn toml_output_reads_back() {
        let mut cfg = Config::default();
        cfg.set_default_location(Location::new(36.72016, -4.42034));

        let text = cfg.to_toml().unwrap();

        assert!(text.contains("[default_location]"));
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn client_uses_configured_base_url() {
        assert_eq!(Config::default().client().base_url(), BASE_URL);

        let cfg = Config {
            base_url: Some("http://localhost:9000/json".into()),
            ..Config::default()
        };
        assert_eq!(cfg.client().base_url(), "http://localhost:9000/json");
    }
}
