use std::sync::Arc;
use std::time::{Duration, Instant};

use pacman_server::{
    app::{create_router, AppState},
    config::{self, Config},
    logging,
};
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{watch, Notify};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load environment variables
    #[cfg(debug_assertions)]
    dotenvy::from_path(std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env")).ok();
    #[cfg(not(debug_assertions))]
    dotenvy::dotenv().ok();

    logging::setup_logging();

    let config: Config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            std::process::exit(1);
        }
    };

    let addr = std::net::SocketAddr::new(config.host, config.port);
    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_seconds as u64);
    let app = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!(%addr, "Leaderboard listening");

    // coordinated graceful shutdown with timeout
    let notify = Arc::new(Notify::new());
    let (tx_signal, rx_signal) = watch::channel::<Option<Instant>>(None);

    {
        let notify = notify.clone();
        let tx = tx_signal.clone();
        tokio::spawn(async move {
            let signaled_at = shutdown_signal().await;
            let _ = tx.send(Some(signaled_at));
            notify.notify_waiters();
        });
    }

    let mut rx_for_timeout = rx_signal.clone();
    let timeout_task = async move {
        // wait until first signal observed
        while rx_for_timeout.borrow().is_none() {
            if rx_for_timeout.changed().await.is_err() {
                return; // channel closed
            }
        }
        tokio::time::sleep(shutdown_timeout).await;
        warn!(timeout = ?shutdown_timeout, "Shutdown timeout elapsed, forcing exit");
        std::process::exit(1);
    };

    let notify_for_server = notify.clone();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        notify_for_server.notified().await;
    });

    tokio::select! {
        res = server => {
            if let Some(signaled_at) = *rx_signal.borrow() {
                let elapsed = signaled_at.elapsed();
                if elapsed < shutdown_timeout {
                    info!(remaining = ?(shutdown_timeout - elapsed), "Graceful shutdown complete");
                }
            }
            if let Err(e) = res {
                error!(error = %e, "Server error");
                std::process::exit(1);
            }
        }
        _ = timeout_task => {}
    }
}

async fn shutdown_signal() -> Instant {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term_stream) => {
                term_stream.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { Instant::now() }
        _ = sigterm => { Instant::now() }
    }
}
