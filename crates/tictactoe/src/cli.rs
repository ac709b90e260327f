//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, StrategyKind, Symbol};

/// Tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Your symbol; skips the symbol choice screen
        #[arg(short, long)]
        symbol: Option<Symbol>,

        /// Computer strategy (heuristic, first-available)
        #[arg(long)]
        strategy: Option<StrategyKind>,
    },

    /// Print the computer's move for a board
    Suggest {
        /// Nine cells, row-major: X, O and . for empty (e.g. "XX. OO. ...")
        #[arg(short, long)]
        board: Board,

        /// Symbol the computer plays
        #[arg(long)]
        computer: Symbol,

        /// Computer strategy (heuristic, first-available)
        #[arg(long)]
        strategy: Option<StrategyKind>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suggest() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "suggest",
            "--board",
            "XX. OO. ...",
            "--computer",
            "x",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Suggest { board, computer, strategy, json } => {
                assert_eq!(board.to_compact(), "XX.OO....");
                assert_eq!(computer, Symbol::X);
                assert_eq!(strategy, None);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_play_with_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "custom.toml",
            "play",
            "--symbol",
            "o",
            "--strategy",
            "first-available",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Command::Play { symbol, strategy } => {
                assert_eq!(symbol, Some(Symbol::O));
                assert_eq!(strategy, Some(StrategyKind::FirstAvailable));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_board() {
        assert!(
            Cli::try_parse_from(["tictactoe", "suggest", "--board", "XO", "--computer", "x"]).is_err()
        );
    }
}
