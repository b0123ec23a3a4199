//! Prometheus registry backed by the resolver's own atomic counters.

use ipname_application::services::QueryCounters;
use prometheus_client::collector::Collector;
use prometheus_client::encoding::{DescriptorEncoder, EncodeMetric};
use prometheus_client::metrics::counter::ConstCounter;
use prometheus_client::registry::Registry;

pub const METRIC_PREFIX: &str = "ipname";

/// Reads a fresh snapshot on every scrape. Counters get the `_total`
/// suffix from the encoder, so the samples are `ipname_query_total` and
/// `ipname_err_total`.
#[derive(Debug)]
struct QueryCountersCollector {
    counters: QueryCounters,
}

impl Collector for QueryCountersCollector {
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        let snapshot = self.counters.snapshot();

        for (name, help, value) in [
            ("query", "Total number of incoming queries", snapshot.queries_total),
            ("err", "Total number of invalid queries", snapshot.errors_total),
        ] {
            let counter = ConstCounter::new(value);
            let metric_encoder =
                encoder.encode_descriptor(name, help, None, counter.metric_type())?;
            counter.encode(metric_encoder)?;
        }

        Ok(())
    }
}

pub fn build_registry(counters: QueryCounters) -> Registry {
    let mut registry = Registry::with_prefix(METRIC_PREFIX);
    registry.register_collector(Box::new(QueryCountersCollector { counters }));
    registry
}

/// Encodes every registered metric in OpenMetrics text format.
pub fn encode(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    prometheus_client::encoding::text::encode(&mut buffer, registry)?;
    Ok(buffer)
}
