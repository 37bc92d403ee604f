use shared::{CHAT_RADIUS, MAP_HEIGHT, MAP_WIDTH, OUTBOX_CAPACITY};
use std::time::Duration;

/// Runtime configuration for a server instance.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    /// Grid width; positions are clamped to `0..=width`.
    pub width: i32,
    /// Grid height; positions are clamped to `0..=height`.
    pub height: i32,
    /// Chat delivery radius in grid units; 0 makes all chat global.
    pub chat_radius: i32,
    /// Bounded capacity of each player's outbox; excess frames are dropped.
    pub outbox_capacity: usize,
    /// Optional background map refresh period. `None` leaves map pushes
    /// purely event-driven (join, move, leave).
    pub map_refresh: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            chat_radius: CHAT_RADIUS,
            outbox_capacity: OUTBOX_CAPACITY,
            map_refresh: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_shared_constants() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.width, MAP_WIDTH);
        assert_eq!(cfg.height, MAP_HEIGHT);
        assert_eq!(cfg.chat_radius, CHAT_RADIUS);
        assert_eq!(cfg.outbox_capacity, OUTBOX_CAPACITY);
        assert!(cfg.map_refresh.is_none());
    }
}
