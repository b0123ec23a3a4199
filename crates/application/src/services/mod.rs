mod query_counters;

pub use query_counters::{CounterSnapshot, QueryCounters};
