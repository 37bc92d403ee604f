//! Per-connection session: handshake, registration, read/dispatch loop,
//! and deregistration.
//!
//! Each session owns the read half of its socket and a sender clone of its
//! own outbox for direct replies. The write half belongs to the pump task
//! for the whole connection lifetime; nothing else ever writes to the
//! socket after the handshake prompt.

use crate::broadcast::Broadcaster;
use crate::config::ServerConfig;
use crate::pump;
use crate::registry::Registry;
use log::debug;
use shared::{Command, Frame, USAGE};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, RwLock};

/// Runs one client connection end-to-end. Any transport error or EOF on the
/// read side ends the session; deregistration happens exactly once, here.
pub async fn run(
    cfg: ServerConfig,
    registry: Arc<RwLock<Registry>>,
    broadcaster: Broadcaster,
    stream: TcpStream,
    addr: SocketAddr,
) {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // Handshake: the pump does not exist yet, so the prompt goes straight
    // to the socket.
    let prompt = Frame::Msg("Enter your name:".to_string()).encode();
    if write_half.write_all(prompt.as_bytes()).await.is_err() {
        return;
    }

    let name = match lines.next_line().await {
        Ok(Some(line)) => line.trim().to_string(),
        Ok(None) => return,
        Err(e) => {
            debug!("Handshake read failed for {}: {}", addr, e);
            return;
        }
    };

    let (outbox, delivery) = mpsc::channel(cfg.outbox_capacity);
    let id = registry.write().await.add(name.clone(), outbox.clone());

    tokio::spawn(pump::run(delivery, write_half));

    broadcaster.map().await;
    broadcaster
        .global(Frame::Msg(format!("--- {} joined ---", name)))
        .await;

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let msg = line.trim();
                if msg.is_empty() {
                    continue;
                }

                if msg.starts_with('/') {
                    dispatch_command(&registry, &broadcaster, &outbox, id, msg).await;
                } else {
                    broadcaster.chat(id, format!("{}: {}", name, msg)).await;
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Read error from {}: {}", addr, e);
                break;
            }
        }
    }

    // Bind the removal result first so the write guard is released before
    // the broadcasts below take the read lock.
    let removed = registry.write().await.remove(id);
    if let Some(player) = removed {
        // Removal surrendered the registry's sender; dropping it here plus
        // the session's own clone at return closes the outbox, and the
        // pump drains whatever is still queued, then exits.
        drop(player);
        broadcaster
            .global(Frame::Msg(format!("--- {} left the chat ---", name)))
            .await;
        broadcaster.map().await;
    }
}

/// Movement state machine. A recognized command moves one cell (clamped at
/// the grid edges), replies to the sender with the new position, and
/// triggers a global map broadcast even when clamping left the position
/// unchanged. An unrecognized command gets a direct usage reply only.
async fn dispatch_command(
    registry: &Arc<RwLock<Registry>>,
    broadcaster: &Broadcaster,
    outbox: &mpsc::Sender<Frame>,
    id: u64,
    token: &str,
) {
    let command = match Command::parse(token) {
        Some(command) => command,
        None => {
            let _ = outbox.try_send(Frame::Msg(USAGE.to_string()));
            return;
        }
    };

    // Bound separately so the write guard is gone before the map broadcast
    // takes the read lock.
    let moved = registry.write().await.apply_move(id, command);
    if let Some((x, y)) = moved {
        let _ = outbox.try_send(Frame::Msg(format!("You moved to ({}, {})", x, y)));
        broadcaster.map().await;
    }
}
