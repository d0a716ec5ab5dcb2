//! Cross-platform key injector using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Key codes are passed
//! through as `Key::Other`, which enigo reads as a virtual-key code on
//! Windows, a CG key code on macOS, and a keysym on Linux. Characters go
//! through `Keyboard::text`, which uses each OS's Unicode event path.
//!
//! One worker thread owns the enigo connection for the injector's lifetime
//! and serves every press in order. The connection is opened on first use
//! and reopened after a failed event.

use std::thread;

use async_trait::async_trait;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::application::ports::{InjectError, KeyInjector};
use crate::domain::keys::{KeyCode, KeyTarget};

type Reply = oneshot::Sender<Result<(), InjectError>>;

/// Blocking key events on an open connection
trait KeySink {
    fn press(&mut self, code: KeyCode) -> Result<(), InjectError>;
    fn text(&mut self, ch: char) -> Result<(), InjectError>;
}

impl KeySink for Enigo {
    fn press(&mut self, code: KeyCode) -> Result<(), InjectError> {
        self.key(Key::Other(code.value()), Direction::Click)
            .map_err(|e| InjectError::PressFailed {
                code,
                message: e.to_string(),
            })
    }

    fn text(&mut self, ch: char) -> Result<(), InjectError> {
        let mut buf = [0u8; 4];
        Keyboard::text(self, ch.encode_utf8(&mut buf)).map_err(|e| InjectError::UnicodeFailed {
            ch,
            message: e.to_string(),
        })
    }
}

fn connect() -> Result<Enigo, InjectError> {
    Enigo::new(&Settings::default())
        .map_err(|e| InjectError::Unavailable(format!("Failed to create enigo: {}", e)))
}

/// Serve requests until every sender is gone.
fn serve<S, C>(mut requests: mpsc::UnboundedReceiver<(KeyTarget, Reply)>, mut connect: C)
where
    S: KeySink,
    C: FnMut() -> Result<S, InjectError>,
{
    let mut sink: Option<S> = None;

    while let Some((target, reply)) = requests.blocking_recv() {
        let opened = match sink.take() {
            Some(open) => Ok(open),
            None => connect(),
        };
        let result = match opened {
            Ok(mut open) => {
                let sent = match target {
                    KeyTarget::Code(code) => open.press(code),
                    KeyTarget::Unicode(ch) => open.text(ch),
                };
                if sent.is_ok() {
                    sink = Some(open);
                }
                sent
            }
            Err(e) => Err(e),
        };
        // The caller may have given up waiting
        let _ = reply.send(result);
    }
    debug!("enigo worker exited");
}

/// Cross-platform key injector using enigo
pub struct EnigoInjector {
    requests: mpsc::UnboundedSender<(KeyTarget, Reply)>,
}

impl EnigoInjector {
    /// Create a new enigo injector and its worker thread
    pub fn new() -> Self {
        Self::with_connector(connect)
    }

    fn with_connector<S, C>(connect: C) -> Self
    where
        S: KeySink,
        C: FnMut() -> Result<S, InjectError> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let spawned = thread::Builder::new()
            .name("enigo".to_string())
            .spawn(move || serve(rx, connect));
        if let Err(e) = spawned {
            // Requests then fail with `Unavailable`
            warn!(error = %e, "failed to start enigo worker");
        }
        Self { requests: tx }
    }

    async fn send(&self, target: KeyTarget) -> Result<(), InjectError> {
        let unavailable = || InjectError::Unavailable("enigo worker stopped".to_string());
        let (reply, response) = oneshot::channel();
        self.requests
            .send((target, reply))
            .map_err(|_| unavailable())?;
        response.await.map_err(|_| unavailable())?
    }
}

impl Default for EnigoInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyInjector for EnigoInjector {
    async fn press_key_code(&self, code: KeyCode) -> Result<(), InjectError> {
        self.send(KeyTarget::Code(code)).await
    }

    async fn inject_unicode(&self, ch: char) -> Result<(), InjectError> {
        self.send(KeyTarget::Unicode(ch)).await
    }
}
