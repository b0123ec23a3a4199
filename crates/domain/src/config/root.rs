use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::metrics::MetricsConfig;
use super::server::{parse_listen_addr, ServerConfig};
use crate::SuffixSet;

/// Main configuration structure for ipname
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Accepted domains and listeners
    #[serde(default)]
    pub server: ServerConfig,

    /// Prometheus endpoint
    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ipname.toml in current directory
    /// 3. /etc/ipname/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ipname.toml").exists() {
            Self::from_file("ipname.toml")?
        } else if std::path::Path::new("/etc/ipname/config.toml").exists() {
            Self::from_file("/etc/ipname/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(domains) = overrides.domains {
            self.server.domains = domains;
        }
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(metrics) = overrides.metrics_listen {
            self.metrics.listen = Some(metrics);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let suffixes = self.suffix_set();
        if suffixes.is_empty() {
            return Err(ConfigError::Validation(
                "No root domain configured".to_string(),
            ));
        }

        if suffixes.contains(".") {
            return Err(ConfigError::Validation(
                "The root zone cannot be used as a domain".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(ConfigError::Validation(
                "Worker count must be at least 1".to_string(),
            ));
        }

        self.server.listen_addr()?;
        self.metrics_addr()?;

        Ok(())
    }

    pub fn suffix_set(&self) -> SuffixSet {
        SuffixSet::from_domains(&self.server.domains)
    }

    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        match self.metrics.listen.as_deref() {
            Some(addr) if !addr.trim().is_empty() => parse_listen_addr(addr).map(Some),
            _ => Ok(None),
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub domains: Option<Vec<String>>,
    pub listen: Option<String>,
    pub workers: Option<usize>,
    pub metrics_listen: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
