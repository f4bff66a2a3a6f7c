//! Configuration types and loading.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Upstream DNS server, `ip:port`
    #[serde(default = "default_upstream")]
    pub upstream: String,
    /// Overall deadline for one query, in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upstream: default_upstream(),
            query_timeout_ms: default_query_timeout_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

pub fn default_upstream() -> String {
    "127.0.0.1:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    5000
}

// ============== Logging Config ==============

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Set false to silence diagnostics entirely
    #[serde(default = "default_log_queries")]
    pub log_queries: bool,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_queries() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_queries: default_log_queries(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

// ============== Config Loading ==============

/// Load configuration from file. An explicit path must exist; otherwise
/// `./config.yaml` is tried, falling back to the defaults.
pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let config_paths = match path {
        Some(p) => vec![PathBuf::from(p)],
        None => vec![PathBuf::from("config.yaml")],
    };

    for config_path in &config_paths {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let config: Config = serde_yaml_ng::from_str(&content)?;
            return Ok(config);
        }
    }

    if path.is_some() {
        return Err(format!("config file not found: {}", config_paths[0].display()).into());
    }

    Ok(Config::default())
}

// ============== Unit Tests ==============
