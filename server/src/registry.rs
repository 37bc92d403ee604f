//! Player registry: the shared directory of currently connected players.
//!
//! The registry is the only structure mutated by more than one task. Callers
//! wrap it in a single `Arc<RwLock<Registry>>` and hold the lock just long
//! enough to mutate or copy in-memory state; all socket I/O happens after
//! release, through each player's own outbox. The registry never hands out
//! iteration handles, only point-in-time snapshots.

use log::info;
use rand::Rng;
use shared::{Command, Frame, COLORS};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// A connected player as the registry sees them.
///
/// The `outbox` sender is the write side of the player's bounded delivery
/// queue. The registry holds the only persistent clone; dropping it (by
/// removing the player) closes the queue and terminates the player's
/// outbound pump.
#[derive(Debug, Clone)]
pub struct Player {
    /// Session id assigned by the registry, unique for the process lifetime.
    pub id: u64,
    /// Display name chosen at handshake; trimmed, not guaranteed unique.
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// ANSI color assigned round-robin by join order.
    pub color: &'static str,
    pub outbox: mpsc::Sender<Frame>,
}

/// Maps session ids to players and owns all position bookkeeping.
pub struct Registry {
    players: HashMap<u64, Player>,
    next_session_id: u64,
    joined: usize,
    width: i32,
    height: i32,
}

impl Registry {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            players: HashMap::new(),
            next_session_id: 1,
            joined: 0,
            width,
            height,
        }
    }

    /// Registers a new player at a random spawn position and returns their
    /// session id. The color comes from the palette, indexed by join order.
    pub fn add(&mut self, name: String, outbox: mpsc::Sender<Frame>) -> u64 {
        let id = self.next_session_id;
        self.next_session_id += 1;

        let mut rng = rand::thread_rng();
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(0..self.height);
        let color = COLORS[self.joined % COLORS.len()];
        self.joined += 1;

        info!("Player {} ({}) joined at ({}, {})", id, name, x, y);
        self.players.insert(
            id,
            Player {
                id,
                name,
                x,
                y,
                color,
                outbox,
            },
        );

        id
    }

    /// Removes a player, returning them if they were present. Removing an
    /// absent id is a no-op. Once the returned player is dropped, the last
    /// persistent outbox sender goes with it and the pump shuts down.
    pub fn remove(&mut self, id: u64) -> Option<Player> {
        let removed = self.players.remove(&id);
        if let Some(player) = &removed {
            info!("Player {} ({}) disconnected", player.id, player.name);
        }
        removed
    }

    /// Point-in-time copy of all players, sorted by session id so that
    /// iteration order (and render tie-breaks) is deterministic per snapshot.
    pub fn snapshot(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        players.sort_by_key(|p| p.id);
        players
    }

    /// Applies a one-cell move, clamped inclusively to the grid bounds, and
    /// returns the resulting position. A move into a wall keeps the position
    /// unchanged but still counts as a successful move. Returns `None` only
    /// if the player is no longer registered.
    pub fn apply_move(&mut self, id: u64, command: Command) -> Option<(i32, i32)> {
        let player = self.players.get_mut(&id)?;

        match command {
            Command::North => player.y = (player.y + 1).min(self.height),
            Command::South => player.y = (player.y - 1).max(0),
            Command::East => player.x = (player.x + 1).min(self.width),
            Command::West => player.x = (player.x - 1).max(0),
        }

        Some((player.x, player.y))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
