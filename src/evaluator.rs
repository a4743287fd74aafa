//! Hand-tuned heuristic scoring of positions
//!
//! A position is scored by summing a score for every 4-cell window on the
//! board. Windows holding pieces of both players can never be completed and
//! are worth nothing.

use crate::board::{Board, Cell, Player};
use crate::WINDOW;

/// Window with four of the evaluating player's pieces
pub const FOUR_SCORE: i32 = 1000;
/// Window with three pieces and one empty cell
pub const THREE_SCORE: i32 = 100;
/// Window with two pieces and two empty cells
pub const TWO_SCORE: i32 = 10;

/// Scores `board` from the point of view of `player`
///
/// This is only a leaf approximation: it does not detect finished games, the
/// search checks [`Board::outcome`] before calling it.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    board
        .windows()
        .map(|window| score_window(&window, player))
        .sum()
}

/// Scores a single window for `player`
pub fn score_window(window: &[Cell; WINDOW], player: Player) -> i32 {
    let own = count(window, player.cell());
    let opponent = count(window, player.other().cell());
    let empty = count(window, Cell::Empty);

    match (own, opponent, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => -THREE_SCORE,
        (_, 2, 2) => -TWO_SCORE,
        _ => 0,
    }
}

fn count(window: &[Cell; WINDOW], cell: Cell) -> usize {
    window.iter().filter(|&&c| c == cell).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::*;

    #[test]
    fn window_table() {
        let p = Player::One;
        assert_eq!(score_window(&[PlayerOne; 4], p), 1000);
        assert_eq!(score_window(&[PlayerOne, Empty, PlayerOne, PlayerOne], p), 100);
        assert_eq!(score_window(&[Empty, PlayerOne, PlayerOne, Empty], p), 10);
        assert_eq!(score_window(&[PlayerTwo, PlayerTwo, Empty, PlayerTwo], p), -100);
        assert_eq!(score_window(&[PlayerTwo, Empty, Empty, PlayerTwo], p), -10);
        // opponent four-in-a-row is left to terminal detection
        assert_eq!(score_window(&[PlayerTwo; 4], p), 0);
        assert_eq!(score_window(&[PlayerOne, PlayerTwo, Empty, Empty], p), 0);
        assert_eq!(score_window(&[PlayerOne, Empty, Empty, Empty], p), 0);
        assert_eq!(score_window(&[Empty; 4], p), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::new(), Player::One), 0);
        assert_eq!(evaluate(&Board::new(), Player::Two), 0);
    }
}
