pub mod health;
pub mod metrics;
pub mod stats;

pub use health::health_check;
pub use metrics::get_metrics;
pub use stats::get_stats;
