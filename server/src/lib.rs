//! # Grid Chat Server Library
//!
//! A real-time, text-protocol multiplayer server: clients connect over TCP,
//! choose a name, are placed on a 2-D grid, move with single-character
//! commands, and exchange chat delivered only to players within a
//! configurable radius. Every state change pushes a freshly rendered ASCII
//! view of the grid to all connected clients.
//!
//! ## Architecture
//!
//! Each connection runs as a pair of cooperating tasks: a read/dispatch
//! loop ([`session`]) and an outbound delivery pump ([`pump`]), joined by
//! the player's bounded outbox. The [`registry`] is the single source of
//! truth for who is online and where, protected by one `RwLock`; the lock
//! is held only to mutate or snapshot state, never across socket I/O. The
//! [`broadcast`] module computes delivery sets (global or
//! proximity-filtered) from a snapshot and enqueues onto recipient outboxes
//! with a non-blocking, drop-on-full send.
//!
//! ## Failure policy
//!
//! All failures are handled locally at the session/pump boundary. A read
//! error or EOF tears the connection down and deregisters the player; a
//! pump write error only ends the pump; a full outbox silently drops the
//! frame. Nothing propagates to a central supervisor, and a failing session
//! cannot take the listener or other sessions with it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use server::config::ServerConfig;
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::bind("127.0.0.1:8888", ServerConfig::default()).await?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod broadcast;
pub mod config;
pub mod network;
pub mod pump;
pub mod registry;
pub mod render;
pub mod session;
