use ipname_application::services::QueryCounters;
use ipname_application::use_cases::ResolveEncodedNameUseCase;
use ipname_domain::Config;
use ipname_infrastructure::dns::{DnsServerHandler, TracingQueryObserver};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub counters: QueryCounters,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let suffixes = Arc::new(config.suffix_set());
        info!(
            domains = ?suffixes.iter().collect::<Vec<_>>(),
            "Accepted root domains loaded"
        );

        let counters = QueryCounters::new();
        let use_case = Arc::new(ResolveEncodedNameUseCase::new(
            suffixes,
            counters.clone(),
            Arc::new(TracingQueryObserver::new()),
        ));

        Self {
            counters,
            handler: DnsServerHandler::new(use_case),
        }
    }
}
