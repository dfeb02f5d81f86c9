use crate::adapters::http;
use crate::adapters::storage;
use crate::core::{ConfigProvider, FranchiseService};
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Open the configured store and wire it into the HTTP router.
pub fn build_app(config: &dyn ConfigProvider) -> Result<Router> {
    let repository = storage::open_repository(config.store_backend(), config.data_path())?;
    tracing::info!("Using {} document store", config.store_backend());
    Ok(http::router(Arc::new(FranchiseService::new(repository))))
}

/// Serve until Ctrl-C or SIGTERM, then let in-flight requests finish.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Listening on {}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
