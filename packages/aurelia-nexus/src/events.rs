//! Event sources feeding the main loop
//!
//! Keyboard input is read on a blocking task and forwarded over a channel.
//! Each sent message gets a one-shot timer task that hands its pending reply
//! back to the loop once the thinking delay has elapsed.

use crossterm::event::{self, Event};
use nexus_core::PendingReply;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long the key reader waits before checking whether the loop is gone
const KEY_POLL: Duration = Duration::from_millis(100);

/// Start forwarding terminal events to `tx`.
///
/// The reader stops once the receiving side is dropped.
pub fn spawn_key_reader(tx: mpsc::Sender<Event>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Key reader started");
        while !tx.is_closed() {
            match event::poll(KEY_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Terminal event poll failed: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("Key reader stopped");
    })
}

/// Deliver `pending` to `tx` after its delay.
///
/// Replies are never cancelled; if the loop has already exited the send
/// fails and the reply is dropped.
pub fn schedule_reply(pending: PendingReply, tx: mpsc::UnboundedSender<PendingReply>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(pending.delay).await;
        if tx.send(pending).is_err() {
            tracing::debug!("Reply arrived after the loop closed, dropping it");
        }
    })
}
