pub mod errors;
pub mod logging;
pub mod metrics;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use metrics::MetricsConfig;
pub use root::{CliOverrides, Config};
pub use server::{parse_listen_addr, ServerConfig};
