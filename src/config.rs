use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_SETTINGS_FILE: &str = "trackdump.toml";

const API_URL: &str = "https://api.spotify.com";
const ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Endpoint base URLs, overridable through a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api_url: String,
    pub accounts_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            accounts_url: ACCOUNTS_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads `path` when given, otherwise `trackdump.toml` if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_SETTINGS_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        log::debug!("loaded settings from {}", path.display());
        Self::parse(&contents)
    }
}
