//! Listener and server wiring: accepts connections, spawns sessions, and
//! optionally refreshes the map on a timer.

use crate::broadcast::Broadcaster;
use crate::config::ServerConfig;
use crate::registry::Registry;
use crate::session;
use log::{debug, error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::time::interval;

/// The server: a bound listener plus the shared state every session uses.
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
    registry: Arc<RwLock<Registry>>,
    broadcaster: Broadcaster,
}

impl Server {
    pub async fn bind(addr: &str, config: ServerConfig) -> std::io::Result<Server> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on {}", listener.local_addr()?);

        let registry = Arc::new(RwLock::new(Registry::new(config.width, config.height)));
        let broadcaster = Broadcaster::new(Arc::clone(&registry), config.chat_radius);

        Ok(Server {
            listener,
            config,
            registry,
            broadcaster,
        })
    }

    /// The address actually bound, useful when binding to port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Spawns the background map refresh task when configured. The timer
    /// stays quiet while nobody is connected.
    fn spawn_map_refresher(&self) {
        let period = match self.config.map_refresh {
            Some(period) => period,
            None => return,
        };

        let registry = Arc::clone(&self.registry);
        let broadcaster = self.broadcaster.clone();

        tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first tick fires immediately; skip it.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !registry.read().await.is_empty() {
                    broadcaster.map().await;
                }
            }
        });
    }

    /// Accept loop. Accept errors are transient: logged, never fatal. Each
    /// connection runs as its own task, so a failing session cannot take
    /// down the listener or its neighbors.
    pub async fn run(self) -> std::io::Result<()> {
        self.spawn_map_refresher();

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    debug!("Accepted connection from {}", addr);
                    tokio::spawn(session::run(
                        self.config,
                        Arc::clone(&self.registry),
                        self.broadcaster.clone(),
                        stream,
                        addr,
                    ));
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                }
            }
        }
    }
}
