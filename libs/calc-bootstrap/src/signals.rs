use anyhow::Result;
use tokio::signal;

/// Signals that can trigger shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Wait for termination signals (Ctrl+C, SIGTERM) and report which one arrived.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    let signal = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    tracing::info!(?signal, "Shutdown signal received, initiating graceful shutdown");
    Ok(signal)
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await.inspect_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
    })?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate()).inspect_err(|e| {
        tracing::error!(%e, "Failed to install SIGTERM handler");
    })?;
    handler.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
