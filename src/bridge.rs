//! Cross-context message channel between host and client.
//!
//! Models the postMessage bridge between the top-level page and the iframe:
//! asynchronous, at-most-once delivery, accepts any shape from any origin
//! (messages travel as loose `serde_json::Value`s and are duck-typed on
//! receipt). There is no acknowledgement, retry, or ordering contract across
//! distinct sends; every handler in this crate applies "latest value wins",
//! so a lost message is recovered by the next event.

use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Sending half of one direction of the channel.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: UnboundedSender<Value>,
}

/// Receiving half of one direction of the channel.
#[derive(Debug)]
pub struct Inbox {
    rx: UnboundedReceiver<Value>,
}

impl Outbox {
    /// Posts a message toward the peer. A torn-down peer means the message
    /// is silently lost; that is acceptable, the state is reconstructible
    /// from the next event.
    pub fn post(&self, msg: Value) {
        let _ = self.tx.send(msg);
    }
}

impl Inbox {
    /// Waits for the next delivered message; `None` once the peer is gone.
    pub async fn recv(&mut self) -> Option<Value> {
        self.rx.recv().await
    }

    /// Non-blocking receive for synchronous pump loops.
    pub fn try_recv(&mut self) -> Option<Value> {
        self.rx.try_recv().ok()
    }
}

/// One direction of the channel: post into it on one side, receive on the
/// other.
pub fn mailbox() -> (Outbox, Inbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Outbox { tx }, Inbox { rx })
}
