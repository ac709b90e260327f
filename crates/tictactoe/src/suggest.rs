//! One-shot move suggestion for a board snapshot.

use serde::Serialize;
use tictactoe_core::{Board, GameStatus, Position, Strategy, Symbol, status};
use tracing::{info, instrument};

/// The computer's answer to a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board in compact form.
    pub board: String,
    /// Status of the board as given.
    pub status: GameStatus,
    /// Winning symbol, if any.
    pub winner: Option<Symbol>,
    /// Symbol the computer plays.
    pub computer: Symbol,
    /// Symbol the human plays.
    pub human: Symbol,
    /// Strategy that chose the move.
    pub strategy: String,
    /// The chosen square; absent once the game is over.
    #[serde(rename = "move")]
    pub choice: Option<SuggestedMove>,
}

/// A suggested square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedMove {
    /// Board index (0-8).
    pub index: usize,
    /// Human-readable position.
    pub label: &'static str,
}

impl From<Position> for SuggestedMove {
    fn from(pos: Position) -> Self {
        Self {
            index: pos.to_index(),
            label: pos.label(),
        }
    }
}

/// Asks `strategy` for the computer's move on `board`.
///
/// Finished boards get no move.
#[instrument(skip(board, strategy), fields(cells = %board.to_compact(), strategy_name = strategy.name()))]
pub fn suggest(board: &Board, computer: Symbol, strategy: &dyn Strategy) -> Suggestion {
    let human = computer.opponent();
    let status = status(board);
    let choice = match status {
        GameStatus::InProgress => strategy.select_move(board, computer, human),
        GameStatus::Won(_) | GameStatus::Draw => None,
    };
    info!(?status, ?choice, "Suggestion computed");

    Suggestion {
        board: board.to_compact(),
        status,
        winner: match status {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        },
        computer,
        human,
        strategy: strategy.name().to_string(),
        choice: choice.map(SuggestedMove::from),
    }
}

/// Renders a suggestion for the terminal.
pub fn render_text(board: &Board, suggestion: &Suggestion) -> String {
    let mut out = format!("{board}\n\nStatus: {}\n", suggestion.status);
    match suggestion.choice {
        Some(choice) => out.push_str(&format!(
            "{} ({}) plays {} (key {})\n",
            suggestion.computer,
            suggestion.strategy,
            choice.label,
            choice.index + 1
        )),
        None => out.push_str("No move: game is over\n"),
    }
    out
}
