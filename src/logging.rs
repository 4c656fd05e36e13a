//! Logging setup.
//!
//! The library only emits `tracing` events; embedding programs decide whether
//! to install a subscriber. `init_logging` is the stock one: stderr output,
//! filtered by `RUST_LOG` when set and by the given level otherwise.

use crate::config::BookConfig;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install the stderr subscriber at the configured `log_level`.
///
/// ```
/// use contact_book::{logging, BookConfig};
///
/// let config = BookConfig::default();
/// logging::init_from_config(&config);
/// ```
pub fn init_from_config(config: &BookConfig) -> bool {
    init_logging(&config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }

    #[test]
    fn test_init_from_config_uses_log_level() {
        let config = BookConfig {
            log_level: "trace".to_string(),
            ..BookConfig::default()
        };
        init_from_config(&config);
        // A subscriber is installed by now, whichever test ran first
        assert!(!init_from_config(&config));
    }
}
