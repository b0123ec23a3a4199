use serde::{Deserialize, Serialize};

/// Prometheus endpoint. Disabled unless `listen` is set.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MetricsConfig {
    #[serde(default)]
    pub listen: Option<String>,
}
