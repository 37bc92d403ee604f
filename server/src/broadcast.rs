//! Frame delivery to player outboxes, globally or filtered by proximity.
//!
//! The broadcaster never writes to a socket. It takes a snapshot of the
//! registry, releases the lock, and enqueues onto each recipient's bounded
//! outbox with a non-blocking send. A full outbox drops the frame for that
//! recipient only; delivery is at-most-once, best-effort. A dropped map
//! frame is superseded by the next one, a dropped chat line is an accepted
//! loss.

use crate::registry::{Player, Registry};
use crate::render::render_view;
use log::debug;
use shared::{within_radius, Frame};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Computes per-message delivery sets and enqueues onto recipient outboxes.
#[derive(Clone)]
pub struct Broadcaster {
    registry: Arc<RwLock<Registry>>,
    chat_radius: i32,
}

impl Broadcaster {
    pub fn new(registry: Arc<RwLock<Registry>>, chat_radius: i32) -> Self {
        Self {
            registry,
            chat_radius,
        }
    }

    /// Enqueues a frame onto every connected player's outbox.
    pub async fn global(&self, frame: Frame) {
        let snapshot = self.registry.read().await.snapshot();
        for player in &snapshot {
            enqueue(player, &frame);
        }
    }

    /// Delivers a chat line from `sender_id` to the sender plus every player
    /// within the configured radius of the sender's position. Radius 0 means
    /// everyone. A sender that has already been removed is a no-op.
    pub async fn chat(&self, sender_id: u64, text: String) {
        let snapshot = self.registry.read().await.snapshot();

        let sender = match snapshot.iter().find(|p| p.id == sender_id) {
            Some(sender) => sender,
            None => return,
        };

        let frame = Frame::Msg(text);
        for player in &snapshot {
            if player.id == sender_id
                || within_radius(sender.x, sender.y, player.x, player.y, self.chat_radius)
            {
                enqueue(player, &frame);
            }
        }
    }

    /// Renders the grid from a fresh snapshot and pushes it to everyone.
    pub async fn map(&self) {
        let (snapshot, width, height) = {
            let registry = self.registry.read().await;
            (registry.snapshot(), registry.width(), registry.height())
        };

        let frame = Frame::Map(render_view(&snapshot, width, height));
        for player in &snapshot {
            enqueue(player, &frame);
        }
    }
}

/// Non-blocking enqueue with drop-on-full. A stalled consumer must never
/// stall the broadcasting task or any other recipient.
fn enqueue(player: &Player, frame: &Frame) {
    if player.outbox.try_send(frame.clone()).is_err() {
        debug!("Dropped frame for player {} (outbox full or closed)", player.id);
    }
}
