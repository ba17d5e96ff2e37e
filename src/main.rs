//! batchsort-server - sequential vs concurrent batch sorting over HTTP

use std::sync::Arc;

use anyhow::Context;
use batchsort::api::{create_router, AppState};
use batchsort::config::{ConcurrencyLimit, ServerConfig, SortConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "batchsort-server")]
#[command(about = "Sort batches of integer sequences sequentially or concurrently")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "BATCHSORT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "BATCHSORT_PORT", default_value = "8000")]
    port: u16,

    /// Units of work the concurrent sorter runs at once ("unbounded" for no cap).
    /// Defaults to the number of CPUs
    #[arg(long, env = "BATCHSORT_CONCURRENCY")]
    concurrency: Option<ConcurrencyLimit>,

    /// Log level
    #[arg(long, env = "BATCHSORT_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        let sort = match args.concurrency {
            Some(limit) => SortConfig::default().with_concurrency_limit(limit),
            None => SortConfig::default(),
        };

        ServerConfig {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            sort,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from(Args::parse());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting batchsort-server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        concurrency = %config.sort.concurrency_limit,
        "Concurrent sorter configured"
    );

    let state = Arc::new(AppState::new(&config.sort));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
