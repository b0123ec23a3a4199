use crate::registry::build_registry;
use ipname_application::services::QueryCounters;
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct MetricsState {
    pub counters: QueryCounters,
    pub registry: Arc<Registry>,
}

impl MetricsState {
    pub fn new(counters: QueryCounters) -> Self {
        let registry = Arc::new(build_registry(counters.clone()));
        Self { counters, registry }
    }
}
