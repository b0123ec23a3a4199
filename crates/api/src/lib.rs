pub mod handlers;
pub mod registry;
pub mod routes;
pub mod state;

pub use routes::create_metrics_routes;
pub use state::MetricsState;
