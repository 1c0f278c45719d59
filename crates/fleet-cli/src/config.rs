//! Configuration management for fleet-checker
//!
//! Config stored at: ~/.config/fleet-checker/config.json

use crate::cli::OutputFormat;
use fleet_types::{FleetError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default fleet file
    #[serde(default = "default_fleet_file")]
    pub fleet_file: PathBuf,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_fleet_file() -> PathBuf {
    PathBuf::from("fleet.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleet_file: default_fleet_file(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FleetError::Config("no config directory".to_string()))?
            .join("fleet-checker");
        Ok(config_dir.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| FleetError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FleetError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Checker Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Fleet file:     {}", self.fleet_file.display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        Ok(())
    }
}
