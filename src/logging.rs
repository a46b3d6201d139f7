//! Tracing subscriber setup
//!
//! Log output goes to stderr, or to a file when the terminal UI owns the
//! screen. When `RUST_LOG` is set its directives replace the `-v` level;
//! otherwise the `-v` level applies to every target.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default level
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the filter for a `-v` count and optional `RUST_LOG` directives
///
/// The verbosity level is only the default, used when `directives` is unset
/// or contains nothing valid.
#[must_use]
pub fn filter_for(verbosity: u8, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_for(verbosity, directives.as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn verbosity_is_the_default_filter() {
        assert!(filter_for(0, None).to_string().eq_ignore_ascii_case("warn"));
        assert!(filter_for(2, Some("")).to_string().eq_ignore_ascii_case("debug"));
    }

    #[test]
    fn env_directives_override_verbosity() {
        assert!(filter_for(0, Some("debug")).to_string().eq_ignore_ascii_case("debug"));
        assert!(
            filter_for(3, Some("wordal=info"))
                .to_string()
                .eq_ignore_ascii_case("wordal=info")
        );
    }
}
