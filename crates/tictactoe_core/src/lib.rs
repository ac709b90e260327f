//! Tic-tac-toe game logic against a heuristic computer opponent.
//!
//! The crate is a set of pure functions over a 9-cell board plus a single
//! orchestrator that owns one game.
//!
//! # Architecture
//!
//! - **Rules**: win detection ([`detect_winner`]) and board status ([`status`])
//! - **Strategy**: computer move selection ([`select_move`], [`Strategy`])
//! - **Game**: the turn state machine driving a human against the computer
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Position, Symbol, select_move};
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let pick = select_move(&board, Symbol::X, Symbol::O);
//! assert_eq!(pick, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod rules;
mod strategy;
mod types;

pub use error::{MoveError, ParseBoardError};
pub use game::{Game, Outcome, Phase};
pub use position::Position;
pub use rules::{WINNING_LINES, detect_winner, is_full, status};
pub use strategy::{FirstAvailable, Heuristic, Strategy, StrategyKind, select_move};
pub use types::{Board, GameStatus, Square, Symbol};
