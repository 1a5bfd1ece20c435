use fd_config::{Config, PortFileInfo};
use fd_server::{AppState, build_router, logger};
use fd_store::Store;

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting fd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the flat-file store
    let store = Store::open(
        config.data_dir()?,
        &config.storage.offers_file,
        &config.storage.claims_file,
        &config.storage.users_file,
    )
    .await?;

    let app = build_router(AppState::new(store, config.validation.clone()));

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Write port discovery file for CLI auto-discovery
    match PortFileInfo::write(actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (CLI auto-discovery may not work): {}",
            e
        ),
    }

    info!("Server ready to accept connections");
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Clean up port discovery file
    if let Err(e) = PortFileInfo::remove() {
        warn!("Failed to remove port file: {}", e);
    }

    served?;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
