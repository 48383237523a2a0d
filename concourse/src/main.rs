mod api;
mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use metrics_exporter_statsd::StatsdBuilder;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use flights::airline_a::AirlineAClient;
use flights::airline_b::AirlineBClient;
use flights::search::FlightSearch;
use movies::client::CatalogClient;

use api::AppState;
use config::{Config, MetricsConfig};

#[derive(Parser)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    config.validate()?;

    if let Some(metrics) = &config.metrics {
        install_statsd_recorder(metrics)?;
    }

    let flights_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.flights.request_timeout_secs))
        .build()?;
    let catalog_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.movies.request_timeout_secs))
        .build()?;

    let flight_search = FlightSearch::new(
        Arc::new(AirlineAClient::new(
            flights_client.clone(),
            config.flights.airline_a_url.clone(),
        )),
        Arc::new(AirlineBClient::new(
            flights_client,
            config.flights.airline_b_url.clone(),
        )),
    );

    let state = AppState {
        flight_search: Arc::new(flight_search),
        movies: Arc::new(CatalogClient::new(
            catalog_client,
            config.movies.catalog_url.clone(),
        )),
    };

    let app = api::router(state);
    let listener =
        TcpListener::bind((config.listener.host.as_str(), config.listener.port)).await?;
    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        "listening for requests"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn install_statsd_recorder(config: &MetricsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let recorder = StatsdBuilder::from(config.statsd_host.as_str(), config.statsd_port)
        .build(Some("concourse"))?;
    metrics::set_global_recorder(recorder)?;

    for def in flights::metrics_defs::ALL_METRICS {
        def.describe();
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
