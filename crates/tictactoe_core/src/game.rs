//! Turn orchestration between the human and the computer.
//!
//! [`Game`] owns one board and moves through its [`Phase`]s:
//!
//! ```text
//! AwaitingSymbolChoice ─► HumanTurn ⇄ ComputerTurn ─► Terminal
//! ```
//!
//! Every mutation is followed by a status check and, when it is the
//! computer's turn, an immediate computer move. Callers only ever observe the
//! game waiting for the human or finished.

use crate::error::MoveError;
use crate::rules;
use crate::strategy::{Strategy, StrategyKind};
use crate::{Board, GameStatus, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A symbol completed a line.
    Winner(Symbol),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The human has not picked a symbol yet.
    AwaitingSymbolChoice,
    /// Waiting for the human to place a mark.
    HumanTurn,
    /// The computer is about to move.
    ComputerTurn,
    /// Game over. Absorbing until a new game starts.
    Terminal(Outcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingSymbolChoice => f.write_str("Choose your symbol"),
            Phase::HumanTurn => f.write_str("Player's Turn"),
            Phase::ComputerTurn => f.write_str("Computer's Turn"),
            Phase::Terminal(Outcome::Winner(symbol)) => write!(f, "Winner: {symbol}"),
            Phase::Terminal(Outcome::Draw) => f.write_str("Draw!"),
        }
    }
}

/// A single game of human against computer.
#[derive(Debug)]
pub struct Game {
    board: Board,
    phase: Phase,
    human: Option<Symbol>,
    strategy: Box<dyn Strategy>,
    last_computer_move: Option<Position>,
}

impl Game {
    /// Creates a game waiting for the human to choose a symbol.
    #[instrument(skip(strategy), fields(strategy_name = strategy.name()))]
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingSymbolChoice,
            human: None,
            strategy,
            last_computer_move: None,
        }
    }

    /// Creates a game using the named strategy.
    pub fn with_kind(kind: StrategyKind) -> Self {
        Self::new(kind.build())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the human's symbol, once chosen.
    pub fn human_symbol(&self) -> Option<Symbol> {
        self.human
    }

    /// Returns the computer's symbol, once the human has chosen.
    pub fn computer_symbol(&self) -> Option<Symbol> {
        self.human.map(Symbol::opponent)
    }

    /// Returns the computer's most recent move in this game.
    pub fn last_computer_move(&self) -> Option<Position> {
        self.last_computer_move
    }

    /// Returns the strategy driving the computer.
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Returns the status derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns true once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Sets the human's symbol and starts play.
    ///
    /// X moves first, so choosing O lets the computer open immediately.
    #[instrument(skip(self))]
    pub fn choose_symbol(&mut self, symbol: Symbol) -> Result<(), MoveError> {
        if self.phase != Phase::AwaitingSymbolChoice {
            return Err(MoveError::SymbolAlreadyChosen);
        }

        info!(human = %symbol, computer = %symbol.opponent(), "Symbol chosen");
        self.human = Some(symbol);
        self.phase = match symbol {
            Symbol::X => Phase::HumanTurn,
            Symbol::O => Phase::ComputerTurn,
        };
        self.dispatch();
        Ok(())
    }

    /// Places the human's mark at `pos`.
    ///
    /// On any error the game is unchanged.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> Result<(), MoveError> {
        let human = match self.phase {
            Phase::AwaitingSymbolChoice => return Err(MoveError::SymbolNotChosen),
            Phase::Terminal(_) => return Err(MoveError::GameOver),
            Phase::ComputerTurn => return Err(MoveError::NotYourTurn),
            Phase::HumanTurn => self.human.ok_or(MoveError::SymbolNotChosen)?,
        };

        self.board.place(pos, human)?;
        debug!(position = %pos, symbol = %human, "Human moved");

        self.phase = self.next_phase(Phase::ComputerTurn);
        self.dispatch();
        Ok(())
    }

    /// Abandons the current game and waits for a new symbol choice.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.board = Board::new();
        self.phase = Phase::AwaitingSymbolChoice;
        self.human = None;
        self.last_computer_move = None;
    }

    /// Runs computer turns until the human is to move or the game ends.
    fn dispatch(&mut self) {
        while self.phase == Phase::ComputerTurn {
            let Some(human) = self.human else {
                warn!("Computer turn without a chosen symbol");
                self.phase = Phase::AwaitingSymbolChoice;
                return;
            };
            let computer = human.opponent();

            let Some(pos) = self.strategy.select_move(&self.board, computer, human) else {
                // Only reachable if a strategy misreports a playable board.
                warn!(board = %self.board.to_compact(), "Strategy returned no move");
                self.phase = Phase::Terminal(Outcome::Draw);
                return;
            };

            if let Err(e) = self.board.place(pos, computer) {
                warn!(error = %e, strategy = self.strategy.name(), "Strategy chose an occupied square");
                self.phase = Phase::Terminal(Outcome::Draw);
                return;
            }
            debug!(position = %pos, symbol = %computer, "Computer moved");
            self.last_computer_move = Some(pos);
            self.phase = self.next_phase(Phase::HumanTurn);
        }

        if let Phase::Terminal(outcome) = self.phase {
            info!(?outcome, "Game over");
        }
    }

    /// Terminal phase if the board is decided, else `otherwise`.
    fn next_phase(&self, otherwise: Phase) -> Phase {
        match rules::status(&self.board) {
            GameStatus::Won(symbol) => Phase::Terminal(Outcome::Winner(symbol)),
            GameStatus::Draw => Phase::Terminal(Outcome::Draw),
            GameStatus::InProgress => otherwise,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_kind(StrategyKind::default())
    }
}
