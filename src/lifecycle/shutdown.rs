//! Stop request fan-out.
//!
//! `main` owns one `Shutdown`; the signal task fires it and `HttpServer::run`
//! holds a receiver as its graceful-shutdown future.

use tokio::sync::broadcast;

/// One-shot "stop serving" notice shared by the signal task and the server.
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // A single pending notice is all any receiver ever needs.
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    /// Receiver for `HttpServer::run`. Subscribe before `trigger` or the
    /// notice is missed.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }

    /// Ask every subscriber to stop. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.notify.send(());
    }

    pub fn receiver_count(&self) -> usize {
        self.notify.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
