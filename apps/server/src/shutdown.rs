use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// Time in-flight requests get to complete after a stop signal.
pub(crate) const DRAIN_PERIOD: Duration = Duration::from_secs(30);

/// Starts a background task that drains `handle` on SIGINT or SIGTERM.
pub(crate) fn drain_on_signal(handle: Handle<SocketAddr>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!(signal = name, period = ?DRAIN_PERIOD, "Draining connections");
                handle.graceful_shutdown(Some(DRAIN_PERIOD));
            },
            Err(e) => error!("Signal listener failed, graceful shutdown disabled: {e:#}"),
        }
    });
}

async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Installing SIGTERM handler")?;

        tokio::select! {
            res = signal::ctrl_c() => res.context("Installing Ctrl+C handler").map(|()| "SIGINT"),
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.context("Installing Ctrl+C handler")?;
        Ok("Ctrl+C")
    }
}
