use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use postcraft_engine::GenerationSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "postcraft.ron";

/// Startup configuration, read from a RON file.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the generation endpoint.
    pub endpoint: String,
    pub request_timeout_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            endpoint: settings.endpoint,
            request_timeout_ms: settings.request_timeout.as_millis() as u64,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }

    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).context("invalid configuration")
    }
}

/// Loads configuration from `path`, or from `postcraft.ron` in the working
/// directory when no path is given.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILENAME), false),
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    AppConfig::from_ron(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
