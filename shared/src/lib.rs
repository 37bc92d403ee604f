//! Vocabulary shared between the server and its tests: wire frames,
//! movement commands, the color palette, and grid geometry.

/// Default grid width in cells.
pub const MAP_WIDTH: i32 = 20;
/// Default grid height in cells.
pub const MAP_HEIGHT: i32 = 10;
/// Default chat radius in grid units; 0 means every message is global.
pub const CHAT_RADIUS: i32 = 5;
/// Default per-player outbox capacity before frames are dropped.
pub const OUTBOX_CAPACITY: usize = 10;

/// Glyph for an unoccupied grid cell.
pub const GROUND: char = '.';

/// ANSI color palette assigned to players round-robin by join order.
pub const COLORS: [&str; 6] = [
    "\x1b[31m", // red
    "\x1b[32m", // green
    "\x1b[33m", // yellow
    "\x1b[34m", // blue
    "\x1b[35m", // magenta
    "\x1b[36m", // cyan
];

pub const RESET: &str = "\x1b[0m";

/// Reply sent for a command the server does not recognize.
pub const USAGE: &str = "Unknown command. Use /w /a /s /d to move.";

/// A server-to-client message together with its wire tag.
///
/// The stream is newline-delimited text; each pushed frame is prefixed with
/// a type tag the client splits on. `Msg` carries a single chat or system
/// line, `Map` carries the multi-line rendered grid (already terminated by
/// a newline per row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Map(String),
    Msg(String),
}

impl Frame {
    /// Encodes the frame for the wire, including the trailing newline for
    /// `Msg` payloads.
    pub fn encode(&self) -> String {
        match self {
            Frame::Map(view) => format!("MAP:{}", view),
            Frame::Msg(text) => format!("MSG:{}\n", text),
        }
    }

    /// Splits a tagged payload back into a frame. Returns `None` for text
    /// that carries no known tag.
    pub fn parse(raw: &str) -> Option<Frame> {
        if let Some(view) = raw.strip_prefix("MAP:") {
            Some(Frame::Map(view.to_string()))
        } else if let Some(text) = raw.strip_prefix("MSG:") {
            Some(Frame::Msg(text.trim_end_matches('\n').to_string()))
        } else {
            None
        }
    }
}

/// Movement command vocabulary.
///
/// One fixed mapping: `/w` moves north (y + 1), `/s` south (y - 1),
/// `/d` east (x + 1), `/a` west (x - 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    North,
    South,
    East,
    West,
}

impl Command {
    pub fn parse(token: &str) -> Option<Command> {
        match token {
            "/w" => Some(Command::North),
            "/s" => Some(Command::South),
            "/d" => Some(Command::East),
            "/a" => Some(Command::West),
            _ => None,
        }
    }
}

/// True when `b` is close enough to `a` to receive a chat of the given
/// radius. Radius 0 means unrestricted delivery; otherwise the squared
/// Euclidean distance is compared against radius squared, ties included.
pub fn within_radius(ax: i32, ay: i32, bx: i32, by: i32, radius: i32) -> bool {
    if radius == 0 {
        return true;
    }
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frame_encoding() {
        let frame = Frame::Msg("hello".to_string());
        assert_eq!(frame.encode(), "MSG:hello\n");
    }

    #[test]
    fn test_map_frame_encoding() {
        let frame = Frame::Map("..\n..\n".to_string());
        assert_eq!(frame.encode(), "MAP:..\n..\n");
    }

    #[test]
    fn test_frame_parse_roundtrip() {
        let msg = Frame::Msg("alice: hi".to_string());
        assert_eq!(Frame::parse(&msg.encode()), Some(msg));

        let map = Frame::Map(".....\n.....\n".to_string());
        assert_eq!(Frame::parse(&map.encode()), Some(map));
    }

    #[test]
    fn test_frame_parse_untagged() {
        assert_eq!(Frame::parse("plain text"), None);
        assert_eq!(Frame::parse(""), None);
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("/w"), Some(Command::North));
        assert_eq!(Command::parse("/s"), Some(Command::South));
        assert_eq!(Command::parse("/d"), Some(Command::East));
        assert_eq!(Command::parse("/a"), Some(Command::West));
    }

    #[test]
    fn test_command_parse_unknown() {
        assert_eq!(Command::parse("/x"), None);
        assert_eq!(Command::parse("/ww"), None);
        assert_eq!(Command::parse("w"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_within_radius_boundary() {
        // Exactly at the radius counts as nearby (<=, not <).
        assert!(within_radius(0, 0, 3, 4, 5));
        assert!(!within_radius(0, 0, 3, 5, 5));
    }

    #[test]
    fn test_within_radius_zero_is_global() {
        assert!(within_radius(0, 0, 1000, 1000, 0));
    }

    #[test]
    fn test_within_radius_worked_example() {
        // A at (2,2), B at (10,8): distance^2 = 64 + 36 = 100 > 25.
        assert!(!within_radius(2, 2, 10, 8, 5));
        // C at (4,3): distance^2 = 4 + 1 = 5 <= 25.
        assert!(within_radius(2, 2, 4, 3, 5));
    }

    #[test]
    fn test_palette_size() {
        assert_eq!(COLORS.len(), 6);
        assert!(COLORS.iter().all(|c| c.starts_with('\x1b')));
    }
}
