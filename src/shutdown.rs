//! Waiting for the process to be asked to quit.
//!
//! [`shutdown_signal`] resolves on Ctrl+C or, on Unix, SIGTERM and reports
//! which one arrived so the binary can log why the rotation was stopped. A
//! platform without a SIGTERM handler falls back to Ctrl+C alone instead of
//! failing.

use std::fmt;

/// The request that ended the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShutdownSignal::Interrupt => "interrupt",
            ShutdownSignal::Terminate => "terminate",
        })
    }
}

pub async fn shutdown_signal() -> ShutdownSignal {
    tracing::debug!("awaiting shutdown signal");
    let received = wait().await;
    tracing::debug!(signal = %received, "shutdown signal received");
    received
}

#[cfg(unix)]
async fn wait() -> ShutdownSignal {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = match signal(SignalKind::terminate()) {
        Ok(term) => term,
        Err(e) => {
            tracing::warn!(error = ?e, "SIGTERM handler unavailable");
            return interrupt().await;
        }
    };
    tokio::select! {
        received = interrupt() => received,
        _ = term.recv() => ShutdownSignal::Terminate,
    }
}

#[cfg(not(unix))]
async fn wait() -> ShutdownSignal {
    interrupt().await
}

async fn interrupt() -> ShutdownSignal {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = ?e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
    ShutdownSignal::Interrupt
}
