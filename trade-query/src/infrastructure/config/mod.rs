//! Configuration loading for the trade query service
//!
//! JSON configuration files carry:
//! - Server bind settings
//! - Whether to boot with the built-in sample trades
//! - Additional trades to seed the store with

use crate::domain::Trade;
use crate::infrastructure::repositories::{InMemoryTradeRepository, sample_trades};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Seed the store with the built-in sample trades first
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,

    /// Trades appended after the sample data, in file order
    #[serde(default)]
    pub trades: Vec<Trade>,
}

fn default_service_name() -> String {
    "Trade Query Service".to_string()
}

fn default_sample_data() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            sample_data: default_sample_data(),
            trades: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the trade store described by this configuration
    pub fn build_repository(&self) -> InMemoryTradeRepository {
        let repo = InMemoryTradeRepository::new();
        if self.sample_data {
            repo.extend(sample_trades());
        }
        repo.extend(self.trades.iter().cloned());
        repo
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `HOST` and `PORT` when set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
