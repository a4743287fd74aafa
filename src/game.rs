//! The turn loop around one authoritative board

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::board::{Board, GameState, Player};
use crate::player::MoveProvider;

pub struct Game {
    board: Board,
    players: [Box<dyn MoveProvider>; 2],
    current: Player,
    state: GameState,
    /// Columns played so far, 0-indexed
    pub moves: Vec<usize>,
}

impl Game {
    /// Creates a game on an empty board, player one to move
    ///
    /// `players[0]` must play for player one and `players[1]` for player two.
    pub fn new(players: [Box<dyn MoveProvider>; 2]) -> Result<Self> {
        if players[0].player() != Player::One || players[1].player() != Player::Two {
            return Err(anyhow!(
                "players are seated in the wrong order: {} then {}",
                players[0].name(),
                players[1].name()
            ));
        }
        Ok(Self {
            board: Board::new(),
            players,
            current: Player::One,
            state: GameState::Playing,
            moves: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player whose turn it is
    pub fn current(&self) -> Player {
        self.current
    }

    pub fn provider(&self, player: Player) -> &dyn MoveProvider {
        match player {
            Player::One => &*self.players[0],
            Player::Two => &*self.players[1],
        }
    }

    /// Plays a single turn
    ///
    /// Asks the current player for a column, applies it and updates the
    /// game state. A finished game is left unchanged.
    pub fn step(&mut self) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Ok(self.state);
        }

        let player = self.current;
        let provider = match player {
            Player::One => &mut self.players[0],
            Player::Two => &mut self.players[1],
        };
        let name = provider.name();

        match provider.choose_move(&self.board)? {
            Some(column) => {
                self.board = self
                    .board
                    .drop(column, player)
                    .with_context(|| format!("{} chose an illegal move", name))?;
                self.moves.push(column);
                info!("{} plays column {}", name, column + 1);
                self.state = self.board.outcome();
            }
            None if self.board.is_full() => self.state = GameState::Draw,
            None => {
                return Err(anyhow!(
                    "{} gave no move with columns still open",
                    name
                ))
            }
        }

        if self.state == GameState::Playing {
            self.current = player.other();
        }
        Ok(self.state)
    }

    /// Plays until the game ends, calling `on_move` after every turn
    pub fn play<F: FnMut(&Game)>(&mut self, mut on_move: F) -> Result<GameState> {
        while self.step()? == GameState::Playing {
            on_move(self);
        }
        on_move(self);
        Ok(self.state)
    }
}
