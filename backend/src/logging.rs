//! Log subscriber set-up. Services log through the `log` macros; the fmt
//! subscriber picks those records up through its `tracing-log` bridge.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber filtered at `level` (any `EnvFilter`
/// directive). Returns `false` when a subscriber was already installed.
pub fn init_logging(level: &str) -> Result<bool> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level directive: {}", level))?;

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => {
            tracing::info!("Logging initialised at {}", level);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
