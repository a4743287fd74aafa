//! The game board: cells, gravity drops and end-of-game detection

use std::fmt;

use crate::error::{InvalidMove, ParseError};
use crate::{HEIGHT, WIDTH, WINDOW};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The integer identity of the player, 1 or 2
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// The number of distinct 4-cell windows across all orientations
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - WINDOW + 1)
    + WIDTH * (HEIGHT - WINDOW + 1)
    + 2 * (HEIGHT - WINDOW + 1) * (WIDTH - WINDOW + 1);

mod static_windows {
    use super::NUM_WINDOWS;
    use crate::{HEIGHT, WIDTH, WINDOW};

    const fn line(row: usize, column: usize, dy: isize, dx: isize) -> [(usize, usize); WINDOW] {
        let mut cells = [(0, 0); WINDOW];
        let mut i = 0;
        while i < WINDOW {
            cells[i] = (
                (row as isize + dy * i as isize) as usize,
                (column as isize + dx * i as isize) as usize,
            );
            i += 1;
        }
        cells
    }

    /// (row, column) coordinates of every window: horizontal, vertical,
    /// then both diagonals
    pub const fn windows() -> [[(usize, usize); WINDOW]; NUM_WINDOWS] {
        let mut windows = [[(0, 0); WINDOW]; NUM_WINDOWS];
        let mut n = 0;

        let mut row = 0;
        while row < HEIGHT {
            let mut column = 0;
            while column + WINDOW <= WIDTH {
                windows[n] = line(row, column, 0, 1);
                n += 1;
                column += 1;
            }
            row += 1;
        }

        let mut column = 0;
        while column < WIDTH {
            let mut row = 0;
            while row + WINDOW <= HEIGHT {
                windows[n] = line(row, column, 1, 0);
                n += 1;
                row += 1;
            }
            column += 1;
        }

        // falling to the right: \
        let mut row = 0;
        while row + WINDOW <= HEIGHT {
            let mut column = 0;
            while column + WINDOW <= WIDTH {
                windows[n] = line(row, column, 1, 1);
                n += 1;
                column += 1;
            }
            row += 1;
        }

        // rising to the right: /
        let mut row = WINDOW - 1;
        while row < HEIGHT {
            let mut column = 0;
            while column + WINDOW <= WIDTH {
                windows[n] = line(row, column, -1, 1);
                n += 1;
                column += 1;
            }
            row += 1;
        }
        windows
    }
}

static WINDOWS: [[(usize, usize); WINDOW]; NUM_WINDOWS] = static_windows::windows();

/// A Connect 4 grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom. Boards are
/// plain values: [`Board::drop`] returns a new board and leaves the receiver
/// untouched, so search code never has to undo a move.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board by playing a sequence of 1-indexed columns, starting
    /// with player one and alternating
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, ParseError> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.winner().is_some() {
                        return Err(ParseError::GameOver);
                    }
                    board = board.drop(column - 1, player)?;
                    player = player.other();
                }
                _ => return Err(ParseError::BadMove(column_char)),
            }
        }
        Ok(board)
    }

    /// Parses a diagram of `HEIGHT` rows listed top to bottom, using `.` for
    /// empty cells, `X` for player one and `O` for player two. Whitespace
    /// inside a row is ignored.
    ///
    /// Diagrams that no game could reach are rejected: floating pieces,
    /// piece counts more than one apart, or a 4-in-a-row for both players.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        if rows.len() != HEIGHT {
            return Err(ParseError::WrongShape {
                what: "rows",
                expected: HEIGHT,
                found: rows.len(),
            });
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if symbols.len() != WIDTH {
                return Err(ParseError::WrongShape {
                    what: "columns",
                    expected: WIDTH,
                    found: symbols.len(),
                });
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::PlayerOne,
                    'O' | 'o' => Cell::PlayerTwo,
                    other => return Err(ParseError::BadCell(other)),
                };
            }
        }

        // no piece may rest above an empty cell
        for row in 0..HEIGHT - 1 {
            for column in 0..WIDTH {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty()
                {
                    return Err(ParseError::Floating { row, column });
                }
            }
        }

        // players alternate, so neither can be more than one piece ahead
        let count = |cell: Cell| board.cells.iter().flatten().filter(|&&c| c == cell).count();
        let (one, two) = (count(Cell::PlayerOne), count(Cell::PlayerTwo));
        if one > two + 1 || two > one + 1 {
            return Err(ParseError::PieceCount { one, two });
        }

        let has_four = |player: Player| {
            board
                .windows()
                .any(|window| window.iter().all(|&cell| cell == player.cell()))
        };
        if has_four(Player::One) && has_four(Player::Two) {
            return Err(ParseError::BothWon);
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// A column can be played while its top cell is empty
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Playable columns in ascending order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.playable(column))
    }

    /// Returns a new board with `player`'s piece resting on the lowest empty
    /// cell of `column`
    pub fn drop(&self, column: usize, player: Player) -> Result<Board, InvalidMove> {
        if column >= WIDTH {
            return Err(InvalidMove::ColumnOutOfRange(column));
        }
        if !self.playable(column) {
            return Err(InvalidMove::ColumnFull(column));
        }
        Ok(self.play(column, player))
    }

    /// Like [`Board::drop`] without the checks: `column` must be one of
    /// [`Board::legal_moves`]
    pub fn play(&self, column: usize, player: Player) -> Board {
        debug_assert!(self.playable(column), "column {} is not playable", column);
        let empty = (0..HEIGHT)
            .take_while(|&row| self.cells[row][column].is_empty())
            .count();

        let mut next = *self;
        next.cells[empty - 1][column] = player.cell();
        next
    }

    pub fn num_moves(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// The contents of every 4-cell window on the board
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        WINDOWS.iter().map(move |window| {
            let mut cells = [Cell::Empty; WINDOW];
            for (cell, &(row, column)) in cells.iter_mut().zip(window.iter()) {
                *cell = self.cells[row][column];
            }
            cells
        })
    }

    /// The owner of a 4-in-a-row, if any
    pub fn winner(&self) -> Option<Player> {
        self.windows().find_map(|window| {
            let owner = window[0].player()?;
            if window.iter().all(|&cell| cell == window[0]) {
                Some(owner)
            } else {
                None
            }
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn outcome(&self) -> GameState {
        match self.winner() {
            Some(player) => GameState::Won(player),
            None if self.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        writeln!(f, "{}", header)?;
        for row in self.cells.iter() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
