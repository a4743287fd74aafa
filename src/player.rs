//! Move providers: everything that can pick a column for one side

use anyhow::{anyhow, Result};
use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use std::fmt;
use std::io::{BufRead, Write};

use crate::board::{Board, Player};
use crate::config::SearchConfig;
use crate::deadline::run_with_deadline;
use crate::search::Searcher;
use crate::WIDTH;

/// The kind of controller behind a player
#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum PlayerKind {
    Ai,
    Random,
    Human,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerKind::Ai => "ai",
            PlayerKind::Random => "random",
            PlayerKind::Human => "human",
        })
    }
}

/// Anything that can choose a move for one player
pub trait MoveProvider: Send {
    fn player(&self) -> Player;

    fn kind(&self) -> PlayerKind;

    /// Picks a column for the current board, or `None` if no column is
    /// playable
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>>;

    fn name(&self) -> String {
        format!("{}:{}", self.player(), self.kind())
    }
}

/// A search-based player
///
/// Uses expectimax against random opponents, where assuming perfect replies
/// would make it needlessly cautious, and alpha-beta otherwise.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    player: Player,
    opponent: PlayerKind,
    config: SearchConfig,
}

impl AiPlayer {
    pub fn new(player: Player, opponent: PlayerKind, config: SearchConfig) -> Self {
        Self {
            player,
            opponent,
            config,
        }
    }

    /// Runs the search for `board` on the calling thread
    pub fn search(&self, board: &Board) -> Option<usize> {
        let mut searcher = Searcher::new(self.player);
        let result = match self.opponent {
            PlayerKind::Random => searcher.expectimax(board, self.config.expectimax_depth),
            _ => searcher.alpha_beta(board, self.config.alpha_beta_depth),
        };
        result.column
    }
}

impl MoveProvider for AiPlayer {
    fn player(&self) -> Player {
        self.player
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        let engine = self.clone();
        let board = *board;
        let column = run_with_deadline(self.config.time_limit, move || engine.search(&board))
            .map_err(|err| anyhow!("Uh oh.... something is wrong with {}: {}", self.player, err))?;
        if let Some(column) = column {
            info!("{} (ai) chooses column {}", self.player, column);
        }
        Ok(column)
    }
}

/// Plays a uniformly random legal column
pub struct RandomPlayer {
    player: Player,
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MoveProvider for RandomPlayer {
    fn player(&self) -> Player {
        self.player
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        let moves: Vec<usize> = board.legal_moves().collect();
        Ok(moves.choose(&mut self.rng).copied())
    }
}

/// Reads columns typed by a person, numbered from 1
pub struct HumanPlayer<R, W> {
    player: Player,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(player: Player, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> MoveProvider for HumanPlayer<R, W> {
    fn player(&self) -> Player {
        self.player
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        if board.legal_moves().next().is_none() {
            return Ok(None);
        }

        writeln!(self.output, "{}'s turn", self.player)?;
        loop {
            write!(self.output, "Enter column number (1-{}): ", WIDTH)?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("input closed while waiting for {}", self.player));
            }

            match buffer.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) if board.playable(column - 1) => {
                    return Ok(Some(column - 1));
                }
                _ => writeln!(
                    self.output,
                    "Invalid input! Please enter a valid column number."
                )?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn human_reprompts_until_valid() {
        let board = Board::from_moves("111111").unwrap();
        let input = Cursor::new("abc\n9\n1\n3\n");
        let mut output = Vec::new();
        let mut human = HumanPlayer::new(Player::One, input, &mut output);

        assert_eq!(human.choose_move(&board).unwrap(), Some(2));
        let prompt = String::from_utf8(output).unwrap();
        assert_eq!(prompt.matches("Invalid input!").count(), 3);
    }

    #[test]
    fn human_errors_on_closed_input() {
        let mut human = HumanPlayer::new(Player::Two, Cursor::new(""), Vec::new());
        assert!(human.choose_move(&Board::new()).is_err());
    }

    #[test]
    fn random_only_picks_legal_columns() {
        let board = Board::from_moves("111111777777").unwrap();
        let mut random = RandomPlayer::with_seed(Player::One, 7);
        for _ in 0..100 {
            let column = random.choose_move(&board).unwrap().unwrap();
            assert!(board.playable(column), "column {} is not legal", column);
        }
    }

    #[test]
    fn ai_takes_immediate_win() {
        // both players have three stacked, player two moves next
        let board = Board::from_moves("1212123").unwrap();
        let mut ai = AiPlayer::new(Player::Two, PlayerKind::Human, SearchConfig::default());
        assert_eq!(ai.choose_move(&board).unwrap(), Some(1));
        assert_eq!(ai.name(), "Player 2:ai");
    }
}
