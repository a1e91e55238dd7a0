//! Outbound notification channel.
//!
//! Components never call their owner back directly. Each mounted
//! component holds an [`Outbox`] and pushes typed notifications into it;
//! the owner, in tests the harness, holds the matching [`Emitted`] end
//! and drains it between interactions. Emission is fire-and-forget: a
//! dropped receiver just discards notifications.

use std::fmt;

use futures_channel::mpsc;

/// A connected outbox/receiver pair.
pub fn channel<M>() -> (Outbox<M>, Emitted<M>) {
    let (tx, rx) = mpsc::unbounded();
    (Outbox { tx }, Emitted { rx })
}

/// Sending half, held by the component.
pub struct Outbox<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M: fmt::Debug> Outbox<M> {
    /// Raise one notification toward the owner.
    pub fn emit(&self, msg: M) {
        log::debug!("notify: {msg:?}");
        // Receiver gone means nobody is listening anymore.
        let _ = self.tx.unbounded_send(msg);
    }
}

/// Receiving half, held by the owner.
pub struct Emitted<M> {
    rx: mpsc::UnboundedReceiver<M>,
}

impl<M> Emitted<M> {
    /// Everything emitted since the previous drain, oldest first.
    pub fn drain(&mut self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(Some(msg)) = self.rx.try_next() {
            out.push(msg);
        }
        out
    }
}
