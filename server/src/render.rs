//! Pure ASCII rendering of the grid from a registry snapshot.

use crate::registry::Player;
use shared::{GROUND, RESET};

/// Renders the grid as a multi-line block of text, one row per line.
///
/// Rows run top-to-bottom from `y = height` down to `y = 0`; columns run
/// `x = 0 .. width`. An occupied cell shows the first character of the
/// occupant's name wrapped in their color (`P` for a player with an empty
/// name); everything else is ground. When several players share a cell the
/// first one in slice order wins, so a snapshot sorted by join order renders
/// deterministically.
pub fn render_view(players: &[Player], width: i32, height: i32) -> String {
    let mut view = String::new();

    for y in (0..=height).rev() {
        for x in 0..width {
            match players.iter().find(|p| p.x == x && p.y == y) {
                Some(player) => match player.name.chars().next() {
                    Some(initial) => {
                        view.push_str(player.color);
                        view.push(initial);
                        view.push_str(RESET);
                    }
                    None => view.push('P'),
                },
                None => view.push(GROUND),
            }
        }
        view.push('\n');
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Frame, COLORS};
    use tokio::sync::mpsc;

    fn player(id: u64, name: &str, x: i32, y: i32, color: &'static str) -> Player {
        let (tx, _rx) = mpsc::channel::<Frame>(1);
        Player {
            id,
            name: name.to_string(),
            x,
            y,
            color,
            outbox: tx,
        }
    }

    #[test]
    fn test_empty_grid_is_all_ground() {
        let view = render_view(&[], 4, 2);
        assert_eq!(view, "....\n....\n....\n");
    }

    #[test]
    fn test_row_and_column_counts() {
        let view = render_view(&[], 20, 10);
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows.len(), 11); // y = 10 ..= 0
        assert!(rows.iter().all(|row| row.len() == 20));
    }

    #[test]
    fn test_player_initial_with_color() {
        let players = vec![player(1, "alice", 1, 0, COLORS[0])];
        let view = render_view(&players, 3, 1);

        let expected_cell = format!("{}a{}", COLORS[0], RESET);
        let rows: Vec<&str> = view.lines().collect();
        // y = 1 is the top row, y = 0 the bottom.
        assert_eq!(rows[0], "...");
        assert_eq!(rows[1], format!(".{}.", expected_cell));
    }

    #[test]
    fn test_top_row_is_highest_y() {
        let players = vec![player(1, "top", 0, 2, COLORS[1])];
        let view = render_view(&players, 2, 2);
        let rows: Vec<&str> = view.lines().collect();
        assert!(rows[0].contains('t'));
        assert_eq!(rows[1], "..");
        assert_eq!(rows[2], "..");
    }

    #[test]
    fn test_empty_name_falls_back_to_glyph() {
        let players = vec![player(1, "", 0, 0, COLORS[0])];
        let view = render_view(&players, 2, 0);
        assert_eq!(view, "P.\n");
    }

    #[test]
    fn test_shared_cell_first_in_slice_wins() {
        let players = vec![
            player(1, "alice", 1, 1, COLORS[0]),
            player(2, "bob", 1, 1, COLORS[1]),
        ];
        let view = render_view(&players, 2, 1);
        assert!(view.contains('a'));
        assert!(!view.contains('b'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let players = vec![
            player(1, "alice", 0, 0, COLORS[0]),
            player(2, "bob", 3, 2, COLORS[1]),
        ];
        assert_eq!(render_view(&players, 5, 3), render_view(&players, 5, 3));
    }

    #[test]
    fn test_player_clamped_to_far_edge_is_off_screen() {
        // x == width is a legal position but lies outside the rendered
        // columns (0 .. width), matching the inclusive movement clamp.
        let players = vec![player(1, "edge", 2, 0, COLORS[0])];
        let view = render_view(&players, 2, 0);
        assert_eq!(view, "..\n");
    }
}
