use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Accepted root domains. Encoded queries must end in one of these.
    #[serde(default)]
    pub domains: Vec<String>,

    /// UDP and TCP listen address. `:53` binds every interface.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Number of SO_REUSEPORT socket pairs.
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_tcp_idle_timeout_secs")]
    pub tcp_idle_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            listen: default_listen(),
            workers: default_workers(),
            tcp_idle_timeout_secs: default_tcp_idle_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.listen)
    }
}

/// Parses a listen address, treating a bare `:PORT` as the dual-stack
/// wildcard `[::]:PORT`.
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, ConfigError> {
    let addr = addr.trim();
    let expanded;
    let addr = if addr.starts_with(':') {
        expanded = format!("[::]{}", addr);
        expanded.as_str()
    } else {
        addr
    };
    addr.parse()
        .map_err(|e| ConfigError::Validation(format!("Invalid listen address '{}': {}", addr, e)))
}

fn default_listen() -> String {
    "[::]:53".to_string()
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn default_tcp_idle_timeout_secs() -> u64 {
    10
}
