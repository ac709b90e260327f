//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_core::{Game, MoveError, Position, StrategyKind, Symbol};
use tracing::{debug, info, instrument};

/// What the main loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    preset_symbol: Option<Symbol>,
    cells: [Rect; 9],
    notice: Option<String>,
}

impl App {
    /// Creates a new application.
    ///
    /// With a preset symbol the game starts immediately and every new game
    /// reuses it.
    #[instrument]
    pub fn new(strategy: StrategyKind, preset_symbol: Option<Symbol>) -> Self {
        let mut app = Self {
            game: Game::with_kind(strategy),
            cursor: Position::Center,
            preset_symbol,
            cells: [Rect::default(); 9],
            notice: None,
        };
        app.apply_preset();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last refused action, cleared by the next accepted one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, cells: [Rect; 9]) {
        self.cells = cells;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.choose(Symbol::X),
            KeyCode::Char('o') | KeyCode::Char('O') => self.choose(Symbol::O),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Control::Continue
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let hit = ratatui::layout::Position::new(column, row);
        if let Some(idx) = self.cells.iter().position(|cell| cell.contains(hit))
            && let Some(pos) = Position::from_index(idx)
        {
            self.cursor = pos;
            self.click(pos);
        }
    }

    /// Restarts the game.
    fn new_game(&mut self) {
        debug!("Restarting game");
        self.game.new_game();
        self.cursor = Position::Center;
        self.notice = None;
        self.apply_preset();
    }

    fn apply_preset(&mut self) {
        if let Some(symbol) = self.preset_symbol {
            self.choose(symbol);
        }
    }

    fn choose(&mut self, symbol: Symbol) {
        let result = self.game.choose_symbol(symbol);
        self.record(result);
    }

    fn click(&mut self, pos: Position) {
        let result = self.game.click(pos);
        self.record(result);
    }

    /// Refused actions change nothing; they only leave a notice.
    fn record(&mut self, result: Result<(), MoveError>) {
        match result {
            Ok(()) => self.notice = None,
            Err(e) => {
                debug!(error = %e, "Ignored input");
                self.notice = Some(e.to_string());
            }
        }
    }
}
