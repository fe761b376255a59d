//! Binary entry point: load config, install the exporter, spawn the
//! observers, run the HTTP server until shutdown.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telegen::clock::SystemClock;
use telegen::config::{load_config, AppConfig};
use telegen::observer::{Resource, ResourceObserver};
use telegen::telemetry::{exporter, MetricsSink};
use telegen::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var_os("TELEGEN_CONFIG")
        .map(PathBuf::from)
        .or_else(|| std::env::args_os().nth(1).map(PathBuf::from));
    let config = load_config(config_path.as_deref())?;

    init_tracing(&config);
    tracing::info!(
        service = %config.service.name,
        bind_address = %config.listener.bind_address,
        error_probability = config.simulation.error_probability,
        "telegen starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => exporter::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let sink = Arc::new(MetricsSink);
    let clock = Arc::new(SystemClock);
    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let interval = Duration::from_secs(config.observability.observer_interval_secs);
    for resource in [Resource::Cpu, Resource::Memory] {
        let observer = ResourceObserver::new(
            resource,
            sink.clone(),
            clock.clone(),
            config.service.host_label.clone(),
            interval,
            observer_rng(&config),
        );
        let rx = shutdown.subscribe();
        tokio::spawn(async move {
            observer.run(rx).await;
        });
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(&config, sink, clock);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let default_filter = format!(
        "telegen={level},tower_http={level}",
        level = config.observability.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn observer_rng(config: &AppConfig) -> StdRng {
    match config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
