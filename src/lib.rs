//! A search-based agent for playing the board game 'Connect 4'
//!
//! The agent looks a fixed number of moves ahead and scores the positions it
//! reaches with a hand-written heuristic. Against a thinking opponent it uses
//! minimax with alpha-beta pruning; against an opponent known to play at
//! random it uses expectimax, averaging over the opponent's replies.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Player}, search::search_alpha_beta};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one threatens to complete the bottom row
//! let board = Board::from_moves("15253")?;
//! assert_eq!(search_alpha_beta(&board, Player::Two, 4), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod player;

pub mod deadline;

pub mod game;

pub mod tournament;

pub mod config;

pub mod error;

mod logging;
pub use logging::logging;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WINDOW: usize = 4;

// a winning line must fit the board in every orientation
const_assert!(WINDOW <= WIDTH && WINDOW <= HEIGHT);
