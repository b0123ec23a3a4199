use clap::Parser;
use ipname_api::MetricsState;
use ipname_domain::{CliOverrides, LogFormat};
use std::time::Duration;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ipname")]
#[command(version)]
#[command(about = "Authoritative DNS responder that answers with the IP encoded in the query name")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root domain(s), split multiple domains using ','
    #[arg(short = 'd', long, value_delimiter = ',')]
    domains: Option<Vec<String>>,

    /// Listen address for UDP and TCP (e.g. ":53", "127.0.0.1:5353")
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Prometheus metrics server address
    #[arg(short = 'm', long)]
    metrics: Option<String>,

    /// Number of SO_REUSEPORT socket pairs
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        domains: cli.domains,
        listen: cli.listen,
        workers: cli.workers,
        metrics_listen: cli.metrics,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "ipname is starting");

    let dns_services = di::DnsServices::new(&config);

    if let Some(metrics_addr) = config.metrics_addr()? {
        let state = MetricsState::new(dns_services.counters.clone());
        tokio::spawn(async move {
            if let Err(e) = server::start_metrics_server(metrics_addr, state).await {
                error!(error = %e, "Metrics server exited");
                std::process::exit(1);
            }
        });
    }

    let dns_addr = config.server.listen_addr()?;
    let dns_server = server::start_dns_server(
        dns_addr,
        dns_services.handler,
        config.server.workers,
        Duration::from_secs(config.server.tcp_idle_timeout_secs),
    );

    tokio::select! {
        result = dns_server => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server exited");
            }
            result?;
        }
        signal = shutdown_signal() => {
            info!(signal, "exiting");
        }
    }

    Ok(())
}

async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
