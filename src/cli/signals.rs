//! Shutdown signal handling for a run

use std::fmt;
use std::io;

use tokio::sync::mpsc;
use tracing::debug;

/// Why a run is being stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Ctrl+C / SIGINT
    Interrupt,
    /// SIGTERM (Unix only)
    Terminate,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => write!(f, "interrupt"),
            Self::Terminate => write!(f, "terminate"),
        }
    }
}

/// Listens for OS shutdown signals and reports the first one.
pub struct ShutdownSignal {
    receiver: mpsc::Receiver<ShutdownReason>,
}

impl ShutdownSignal {
    /// Install the signal listeners. Must be called inside a tokio runtime.
    pub fn listen() -> Result<Self, io::Error> {
        let (tx, rx) = mpsc::channel(4);

        let tx_int = tx.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    debug!("received Ctrl+C");
                    let _ = tx_int.send(ShutdownReason::Interrupt).await;
                }
                Err(e) => debug!(error = %e, "Ctrl+C listener unavailable"),
            }
        });

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate())?;
            tokio::spawn(async move {
                sigterm.recv().await;
                debug!("received SIGTERM");
                let _ = tx.send(ShutdownReason::Terminate).await;
            });
        }
        #[cfg(not(unix))]
        drop(tx);

        Ok(Self { receiver: rx })
    }

    /// Wrap an existing channel of shutdown reasons
    #[cfg(test)]
    pub(crate) fn from_receiver(receiver: mpsc::Receiver<ShutdownReason>) -> Self {
        Self { receiver }
    }

    /// Wait for the first shutdown signal.
    ///
    /// Returns `None` if every listener has gone away without a signal.
    pub async fn recv(&mut self) -> Option<ShutdownReason> {
        self.receiver.recv().await
    }
}
