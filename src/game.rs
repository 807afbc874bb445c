//! Tic-tac-toe engine
//!
//! A 3x3 board, two marks taking strict turns, and win/draw detection over
//! the eight fixed lines. Once the game is won or drawn the board is frozen
//! until [`Board::reset`].

use std::fmt;
use tracing::debug;

pub const BOARD_SIZE: usize = 9;

/// Index triples that win when all three hold the same mark:
/// three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Moves first, shown as `X`
    First,
    /// Shown as `O`
    Second,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange,
    Occupied,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; carries the status after the move
    Accepted(GameStatus),
    /// Nothing changed
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; BOARD_SIZE],
    turn: Mark,
    status: GameStatus,
    winning_line: Option<[usize; 3]>,
}

impl Board {
    /// Empty board, `X` to move
    pub fn new() -> Self {
        Board {
            cells: [None; BOARD_SIZE],
            turn: Mark::First,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Mark that plays next. After a terminal move this stays on the mark
    /// that made it.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Place the current mark at `index`.
    ///
    /// Rejected (and a no-op) when the index is off the board, the slot is
    /// taken, or the game is already over.
    pub fn place_mark(&mut self, index: usize) -> MoveOutcome {
        let rejection = if self.is_finished() {
            Some(MoveRejection::GameOver)
        } else if index >= BOARD_SIZE {
            Some(MoveRejection::OutOfRange)
        } else if self.cells[index].is_some() {
            Some(MoveRejection::Occupied)
        } else {
            None
        };

        if let Some(reason) = rejection {
            debug!(index, ?reason, "move rejected");
            return MoveOutcome::Rejected(reason);
        }

        let mark = self.turn;
        self.cells[index] = Some(mark);

        // Win is checked before fullness so a last-slot winning move is a win
        if let Some(line) = self.find_winning_line() {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(mark);
        } else if self.cells.iter().all(Option::is_some) {
            self.status = GameStatus::Draw;
        } else {
            self.turn = mark.other();
        }

        debug!(index, %mark, status = ?self.status, "mark placed");
        MoveOutcome::Accepted(self.status)
    }

    /// Back to an empty board with `X` to move, from any state
    pub fn reset(&mut self) {
        *self = Board::new();
        debug!("board reset");
    }

    fn find_winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some()
                && self.cells[a] == self.cells[b]
                && self.cells[a] == self.cells[c]
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
