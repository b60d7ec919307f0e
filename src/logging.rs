//! Tracing setup
//!
//! `RUST_LOG` overrides the default filter in both modes.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Filter for one-shot CLI commands
pub const CLI_FILTER: &str = "budget_planner=warn";

/// Filter for the terminal UI
pub const TUI_FILTER: &str = "budget_planner=info";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Appended to; the terminal UI owns the screen
    File(PathBuf),
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber; later calls are ignored
pub fn init_tracing(target: LogTarget) {
    INIT_TRACING.call_once(|| match target {
        LogTarget::Stderr => {
            let _ = fmt()
                .with_env_filter(env_filter(CLI_FILTER))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                let _ = fmt()
                    .with_env_filter(env_filter(TUI_FILTER))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init();
                tracing::info!(path = %path.display(), "tracing initialized");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(LogTarget::Stderr);
        init_tracing(LogTarget::Stderr);
    }
}
