//! Techscan server binary: configuration bootstrap plus the axum serve loop.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techscan_core::WalkingScanner;
use techscan_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad, ConfigLoader},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "techscan-server")]
#[command(about = "REST server for scanning codebases for technology markers")]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();
    let config = load_runtime_config(&args)?;
    run_server(config).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }

    if !warnings.is_empty() {
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    warn!(message = %warning.message, hint = %hint, "configuration warning")
                }
                None => {
                    warn!(message = %warning.message, "configuration warning")
                }
            }
        }
    }

    info!(
        scanner.follow_links = config.scanner.follow_links,
        scanner.max_depth = ?config.scanner.max_depth,
        ui.dist_dir = %config.ui.dist_dir.display(),
        "scanner configuration in effect"
    );

    if !config.ui.dist_dir.is_dir() {
        warn!(
            dir = %config.ui.dist_dir.display(),
            "UI directory not found - only the API will be served"
        );
    }

    Ok(Arc::new(config))
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let mut scanner =
        WalkingScanner::new().with_follow_links(config.scanner.follow_links);
    if let Some(depth) = config.scanner.max_depth {
        scanner = scanner.with_max_depth(depth);
    }

    let state = AppState::new(Arc::clone(&config), Arc::new(scanner));
    let router = create_app(state);

    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.host, config.server.port
    )
    .parse()
    .with_context(|| {
        format!(
            "invalid server address {}:{}",
            config.server.host, config.server.port
        )
    })?;

    info!(
        "Starting Techscan Server (HTTP) on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
