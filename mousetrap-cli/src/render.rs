//! Text rendering of the hex board
//!
//! Odd rows are shifted half a cell to the right, which is what makes the
//! row-parity neighbor tables line up visually:
//!
//! ```text
//!     0 1 2 3
//!  0  . # . .
//!  1   . M . .
//!  2  . . . #
//! ```

use std::fmt::Write;

use mousetrap_core::{Cell, GameState, GameType, Player, SIZE};

const FREE: char = '.';
const WALL: char = '#';
const MOUSE: char = 'M';
const REACHABLE: char = 'o';

/// Draw the board. With `show_moves`, the mouse's legal targets are marked.
pub fn render_board(game: &GameState, show_moves: bool) -> String {
    let moves = if show_moves { game.neighbors() } else { Vec::new() };
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..SIZE {
        let _ = write!(out, "{:<2}", col % 10);
    }
    out.push('\n');

    for row in 0..SIZE {
        let _ = write!(out, "{:>2}  ", row);
        if row % 2 == 1 {
            out.push(' ');
        }
        for col in 0..SIZE {
            let cell = Cell::new(row, col);
            let symbol = if cell == game.mouse_position() {
                MOUSE
            } else if game.walls().contains(&cell) {
                WALL
            } else if moves.contains(&cell) {
                REACHABLE
            } else {
                FREE
            };
            out.push(symbol);
            out.push(' ');
        }
        // trailing space off
        out.pop();
        out.push('\n');
    }
    out
}

/// One-line summary: turn, score and who moves next
pub fn status_line(game: &GameState) -> String {
    let to_move = match game.game_type() {
        GameType::Singleplayer => "place a wall".to_string(),
        GameType::OneVsOne => match game.current_player() {
            Player::Walls => "walls to move".to_string(),
            Player::Mouse => "mouse to move".to_string(),
        },
    };
    let mut line = format!("Turn {} | Score {} | {}", game.turn(), game.score(), to_move);
    if let Some(difficulty) = game.difficulty() {
        let _ = write!(line, " | {:?}", difficulty);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use mousetrap_core::Difficulty;

    #[test]
    fn test_render_marks_mouse_and_walls() {
        let mut game = GameState::empty(GameType::Singleplayer, Some(Difficulty::Easy));
        game.place_wall(Cell::new(0, 1));
        let text = render_board(&game, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), SIZE as usize + 1);
        assert_eq!(lines[1], " 0  . # . . . . . . . . .");
        assert!(lines[6].starts_with(" 5   "));
        assert_eq!(text.matches(MOUSE).count(), 1);
    }

    #[test]
    fn test_render_shows_moves() {
        let game = GameState::empty(GameType::OneVsOne, None);
        let text = render_board(&game, true);
        assert_eq!(text.matches(REACHABLE).count(), 6);
    }

    #[test]
    fn test_status_line() {
        let mut game = GameState::empty(GameType::OneVsOne, None);
        assert_eq!(status_line(&game), "Turn 0 | Score 20000 | walls to move");
        game.place_wall(Cell::new(1, 1));
        assert_eq!(status_line(&game), "Turn 1 | Score 19950 | mouse to move");
    }
}
