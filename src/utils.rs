use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{self, SignalKind};

/// Resolves on Ctrl+C or SIGTERM; publishes already in flight are allowed to finish.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        unix::signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("stopped accepting publishes, draining in-flight requests");
}
