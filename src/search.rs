//! Depth-limited game tree search for choosing moves
//!
//! Two searches are provided. [`Searcher::alpha_beta`] assumes a perfect
//! opponent and prunes branches that cannot change the result.
//! [`Searcher::expectimax`] assumes an opponent choosing uniformly at random
//! and averages over all of its replies.

use log::debug;

use std::time::Instant;

use crate::board::{Board, GameState, Player};
use crate::evaluator::evaluate;

/// Value of a won position, larger than any heuristic score
pub const WIN_SCORE: f64 = 1_000_000.0;
/// Value of a drawn position
pub const DRAW_SCORE: f64 = 0.0;

/// The value of a searched node and the column leading to it
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub value: f64,
    /// `None` at leaves, chance nodes, and boards without legal moves
    pub column: Option<usize>,
}

impl SearchResult {
    fn leaf(value: f64) -> Self {
        Self {
            value,
            column: None,
        }
    }
}

/// Every legal move with the board it produces, in ascending column order
fn children(board: &Board, player: Player) -> impl Iterator<Item = (usize, Board)> + '_ {
    board
        .legal_moves()
        .map(move |column| (column, board.play(column, player)))
}

/// A tree search playing for one player
///
/// # Notes
/// Ties between moves are broken towards the lowest column: children are
/// visited in ascending order and a later child replaces the best one only
/// if it is strictly better.
#[derive(Clone, Debug)]
pub struct Searcher {
    player: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            node_count: 0,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the value of a node that ends the search, or `None` if the
    /// node must be expanded
    ///
    /// Finished games are recognised before the heuristic runs, so a forced
    /// win always outranks a strong-looking position. Wins further from the
    /// root are worth slightly less.
    fn cutoff(&self, board: &Board, depth: usize) -> Option<f64> {
        match board.outcome() {
            GameState::Won(winner) if winner == self.player => Some(WIN_SCORE + depth as f64),
            GameState::Won(_) => Some(-(WIN_SCORE + depth as f64)),
            GameState::Draw => Some(DRAW_SCORE),
            GameState::Playing if depth == 0 => Some(evaluate(board, self.player) as f64),
            GameState::Playing => None,
        }
    }

    /// Minimax search with alpha-beta pruning, `depth` plies deep
    ///
    /// The root is always expanded: a depth of 0 searches one ply, so any
    /// board with a legal move yields a column.
    pub fn alpha_beta(&mut self, board: &Board, depth: usize) -> SearchResult {
        let depth = depth.max(1);
        let start = Instant::now();
        let result = self.alpha_beta_rec(board, depth, f64::NEG_INFINITY, f64::INFINITY, true);
        debug!(
            "alpha-beta {} depth {}: {:?} after {} nodes in {}ms",
            self.player,
            depth,
            result,
            self.node_count,
            start.elapsed().as_millis()
        );
        result
    }

    fn alpha_beta_rec(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        if let Some(value) = self.cutoff(board, depth) {
            return SearchResult::leaf(value);
        }

        if maximizing {
            let mut best = SearchResult::leaf(f64::NEG_INFINITY);
            for (column, next) in children(board, self.player) {
                let score = self.alpha_beta_rec(&next, depth - 1, alpha, beta, false).value;
                if score > best.value {
                    best = SearchResult {
                        value: score,
                        column: Some(column),
                    };
                }
                alpha = alpha.max(best.value);
                // the minimizer above will never let play reach this node
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = SearchResult::leaf(f64::INFINITY);
            for (column, next) in children(board, self.player.other()) {
                let score = self.alpha_beta_rec(&next, depth - 1, alpha, beta, true).value;
                if score < best.value {
                    best = SearchResult {
                        value: score,
                        column: Some(column),
                    };
                }
                beta = beta.min(best.value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Exhaustive minimax without pruning
    ///
    /// Selects the same move as [`Searcher::alpha_beta`] at the same depth,
    /// while visiting every node.
    pub fn minimax(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.minimax_rec(board, depth.max(1), true)
    }

    fn minimax_rec(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        if let Some(value) = self.cutoff(board, depth) {
            return SearchResult::leaf(value);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.other()
        };
        let mut best = SearchResult::leaf(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
        for (column, next) in children(board, mover) {
            let score = self.minimax_rec(&next, depth - 1, !maximizing).value;
            let better = if maximizing {
                score > best.value
            } else {
                score < best.value
            };
            if better {
                best = SearchResult {
                    value: score,
                    column: Some(column),
                };
            }
        }
        best
    }

    /// Expectimax search against a uniformly random opponent, `depth` plies deep
    ///
    /// Like [`Searcher::alpha_beta`], a depth of 0 still expands the root.
    pub fn expectimax(&mut self, board: &Board, depth: usize) -> SearchResult {
        let depth = depth.max(1);
        let start = Instant::now();
        let result = self.expectimax_rec(board, depth, true);
        debug!(
            "expectimax {} depth {}: {:?} after {} nodes in {}ms",
            self.player,
            depth,
            result,
            self.node_count,
            start.elapsed().as_millis()
        );
        result
    }

    /// Expected value of `board` when the random opponent moves next
    pub fn expected_value(&mut self, board: &Board, depth: usize) -> f64 {
        self.expectimax_rec(board, depth, false).value
    }

    fn expectimax_rec(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        self.node_count += 1;

        if let Some(value) = self.cutoff(board, depth) {
            return SearchResult::leaf(value);
        }

        if maximizing {
            let mut best = SearchResult::leaf(f64::NEG_INFINITY);
            for (column, next) in children(board, self.player) {
                let score = self.expectimax_rec(&next, depth - 1, false).value;
                if score > best.value {
                    best = SearchResult {
                        value: score,
                        column: Some(column),
                    };
                }
            }
            best
        } else {
            // chance node: every reply is equally likely, so nothing can be pruned
            let mut total = 0.0;
            let mut count = 0;
            for (_column, next) in children(board, self.player.other()) {
                total += self.expectimax_rec(&next, depth - 1, true).value;
                count += 1;
            }
            SearchResult::leaf(total / count as f64)
        }
    }
}

/// Chooses a column for `player` with alpha-beta search
///
/// Returns `None` only when the board is already finished, whatever the
/// depth.
pub fn search_alpha_beta(board: &Board, player: Player, depth: usize) -> Option<usize> {
    Searcher::new(player).alpha_beta(board, depth).column
}

/// Chooses a column for `player` with expectimax search
///
/// Returns `None` only when the board is already finished, whatever the
/// depth.
pub fn search_expectimax(board: &Board, player: Player, depth: usize) -> Option<usize> {
    Searcher::new(player).expectimax(board, depth).column
}
