//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the strategies and the game orchestrator can share them.

mod draw;
mod win;

pub use draw::{is_full, status};
pub use win::{WINNING_LINES, detect_winner};
