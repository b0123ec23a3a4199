use ipname_api::{create_metrics_routes, MetricsState};
use std::net::SocketAddr;
use tracing::info;

pub async fn start_metrics_server(bind_addr: SocketAddr, state: MetricsState) -> anyhow::Result<()> {
    let app = create_metrics_routes(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(
        bind_address = %bind_addr,
        metrics_url = format!("http://{}/metrics", bind_addr),
        "Metrics server started"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
