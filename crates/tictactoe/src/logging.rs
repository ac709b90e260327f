//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn filter(default: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), default)
}

/// `RUST_LOG` wins when it parses; otherwise the configured filter.
fn filter_from(env: Option<&str>, default: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Logs to `path` so output does not interfere with the TUI.
pub fn init_file(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr for one-shot commands.
pub fn init_stderr(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn config_filter_applies_without_env() {
        let config = Config::default();
        assert_eq!(
            filter_from(None, config.log_filter()).to_string(),
            EnvFilter::new("info").to_string()
        );
    }

    #[test]
    fn env_filter_overrides_config() {
        assert_eq!(
            filter_from(Some("tictactoe_core=debug"), "info").to_string(),
            EnvFilter::new("tictactoe_core=debug").to_string()
        );
    }

    #[test]
    fn malformed_env_falls_back_to_config() {
        assert_eq!(
            filter_from(Some("=[broken"), "warn").to_string(),
            EnvFilter::new("warn").to_string()
        );
    }
}
