//! Configuration data structures

use crate::transport::{TransportKind, UnknownTransportKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for the delivery log size
pub const MAX_HISTORY_LIMIT: usize = 1000;

/// Logging level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "info")]
    #[default]
    Info,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Transport used when none is requested explicitly
    pub default_kind: String,
    /// Logging verbosity level
    pub log_level: LogLevel,
    /// Number of deliveries kept in the delivery log
    pub history_limit: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_kind: TransportKind::Truck.to_string(),
            log_level: LogLevel::Info,
            history_limit: 100,
        }
    }
}

impl Configuration {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Configuration = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Return default configuration if file doesn't exist
            Ok(Configuration::default())
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn default_config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir().ok_or("Could not determine config directory")?;
        Ok(config_dir.join("freightline").join("config.toml"))
    }

    /// Parsed default transport
    pub fn default_transport_kind(&self) -> Result<TransportKind, UnknownTransportKind> {
        self.default_kind.parse()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(err) = self.default_transport_kind() {
            errors.push(format!(
                "default_kind must be one of {}: {}",
                TransportKind::ALL.map(|k| k.as_str()).join(", "),
                err
            ));
        }

        if self.history_limit == 0 {
            errors.push("history_limit must be at least 1".to_string());
        }

        if self.history_limit > MAX_HISTORY_LIMIT {
            errors.push(format!("history_limit cannot exceed {}", MAX_HISTORY_LIMIT));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
