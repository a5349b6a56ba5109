//! Main entry point for the Tourney Standings service
//!
//! Loads configuration, seeds the store from an optional snapshot and serves
//! the read API until a shutdown signal arrives.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tourney_standings::api::{ApiServer, ApiServerConfig};
use tourney_standings::config::{validate_config, AppConfig};
use tourney_standings::service::{AppState, HealthCheck};
use tracing::{error, info, warn};

/// Tourney Standings Service - league tables and leaderboards for a multi-sport tournament
#[derive(Parser)]
#[command(
    name = "tourney-standings",
    version,
    about = "Serves standings, schedules and leaderboards for a multi-sport tournament",
    long_about = "Tourney Standings keeps teams, players, matches and statistics for soccer, \
                 basketball and cheerleading, recomputes league tables from completed matches \
                 on every request, and exposes them through a JSON API."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// HTTP port override
    #[arg(long, value_name = "PORT", help = "Override HTTP server port")]
    http_port: Option<u16>,

    /// Snapshot override
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON snapshot used to seed the store at startup"
    )]
    snapshot: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration, load the snapshot and exit without serving"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C) signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

/// Display startup banner with service information
fn display_startup_banner(config: &AppConfig) {
    info!("🏆 Tourney Standings Service");
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   HTTP address: {}", config.bind_address());
    match &config.data.snapshot_path {
        Some(path) => info!("   Snapshot: {}", path.display()),
        None => info!("   Snapshot: none"),
    }
    info!(
        "   Top scorers: default {}, max {}",
        config.standings.top_scorers_default_limit, config.standings.top_scorers_max_limit
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(http_port) = args.http_port {
        config.service.http_port = http_port;
    }

    if let Some(snapshot) = &args.snapshot {
        config.data.snapshot_path = Some(snapshot.clone());
    }

    validate_config(&config)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    info!("Initializing service components...");
    let app_state = match AppState::from_config(config.clone()) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize application: {:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        let health = HealthCheck::check(&app_state)?;
        info!(
            "Dry run: {} - {} soccer, {} basketball, {} cheerleading teams, {} matches",
            health.status,
            health.stats.soccer_teams,
            health.stats.basketball_teams,
            health.stats.cheerleading_teams,
            health.stats.matches
        );
        info!("Dry run completed - exiting without starting service");
        return Ok(());
    }

    let server = Arc::new(ApiServer::new(
        ApiServerConfig::from_app_config(&config),
        app_state.clone(),
    ));
    let server_task = {
        let server = server.clone();
        tokio::spawn(async move {
            if let Err(e) = server.start().await {
                error!("API server error: {:#}", e);
            }
        })
    };

    info!("✅ Tourney Standings Service is running");
    info!("Press Ctrl+C to shutdown gracefully...");

    tokio::select! {
        _ = wait_for_shutdown_signal() => {
            info!("🛑 Shutdown signal received, beginning graceful shutdown...");
        }
        _ = server_task_finished(&server_task) => {
            warn!("API server exited before a shutdown signal was received");
        }
    }

    server.stop();

    match tokio::time::timeout(config.shutdown_timeout(), server_task).await {
        Ok(_) => info!("✅ Graceful shutdown completed successfully"),
        Err(_) => warn!("⚠️  Shutdown timeout exceeded, forcing exit"),
    }

    info!("🛑 Tourney Standings Service stopped");
    Ok(())
}

/// Resolves once the server task has finished on its own
async fn server_task_finished(task: &tokio::task::JoinHandle<()>) {
    while !task.is_finished() {
        tokio::time::sleep(std::time::Duration::from_millis(250)).await;
    }
}
