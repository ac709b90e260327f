//! Core domain types for tic-tac-toe.

use crate::error::{MoveError, ParseBoardError};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Symbol {
    /// Returns the complementary symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns true if the square holds `symbol`.
    pub fn is(self, symbol: Symbol) -> bool {
        self == Square::Occupied(symbol)
    }

    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Symbol::X) => 'X',
            Square::Occupied(Symbol::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position.
    ///
    /// Used to build arbitrary snapshots. Gameplay goes through [`Board::place`].
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `symbol` into an empty square.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(symbol));
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of empty squares left.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Renders the board as nine characters, `.` for empty.
    pub fn to_compact(&self) -> String {
        self.squares.iter().map(|s| s.to_char()).collect()
    }
}

/// Renders the board with empty squares shown as their 1-based key.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx + 1)?,
                    Square::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`, `O` and `.`/`_`/`-` cells; whitespace, `/` and `|` separate rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Symbol::X),
                'O' | 'o' => Square::Occupied(Symbol::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "unexpected character {other:?} in board"
                    )));
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|cells: Vec<Square>| {
            ParseBoardError::new(format!("expected 9 cells, found {}", cells.len()))
        })?;
        Ok(Self { squares })
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    InProgress,
    /// A symbol completed a line.
    Won(Symbol),
    /// Board full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game can accept no more moves.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("In progress"),
            GameStatus::Won(symbol) => write!(f, "Winner: {symbol}"),
            GameStatus::Draw => f.write_str("Draw!"),
        }
    }
}
