//! Terminal tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **CLI**: `play` opens the TUI, `suggest` answers for a single board
//! - **Config**: optional TOML file overridden by command-line flags
//! - **TUI**: ratatui front-end driving a [`tictactoe_core::Game`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod suggest;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use suggest::{SuggestedMove, Suggestion, render_text, suggest};
pub use tui::{App, Control};
