use std::fmt;

use tokio::signal;

/// Signals that can trigger shutdown.
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CtrlC => f.write_str("Ctrl+C"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM, whichever comes first.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> std::io::Result<ShutdownSignal> {
    let received = tokio::select! {
        result = signal::ctrl_c() => result.map(|()| ShutdownSignal::CtrlC)?,
        result = terminate() => result?,
    };

    tracing::info!(signal = %received, "Shutdown signal received, initiating graceful shutdown");
    Ok(received)
}

#[cfg(unix)]
async fn terminate() -> std::io::Result<ShutdownSignal> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;
    Ok(ShutdownSignal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> std::io::Result<ShutdownSignal> {
    std::future::pending().await
}
