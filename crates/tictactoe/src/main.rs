//! tictactoe - unified CLI
//!
//! Interactive play in the terminal or one-shot move suggestions.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, Config, logging, render_text, suggest, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play { symbol, strategy } => {
            let config = config.with_overrides(strategy, symbol);
            logging::init_file(config.log_file(), config.log_filter())?;
            info!(?config, "Starting interactive game");
            tui::run(&config)
        }
        Command::Suggest {
            board,
            computer,
            strategy,
            json,
        } => {
            let config = config.with_overrides(strategy, None);
            logging::init_stderr(config.log_filter());
            let strategy = config.strategy().build();
            let suggestion = suggest(&board, computer, strategy.as_ref());
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                print!("{}", render_text(&board, &suggestion));
            }
            Ok(())
        }
    }
}
