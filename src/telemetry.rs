use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{LeaderboardError, LeaderboardResult};

/// Install a compact fmt subscriber. `RUST_LOG` wins over the configured
/// level. Fails if a global subscriber is already set.
pub fn init(config: &TelemetryConfig) -> LeaderboardResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            LeaderboardError::Config(format!("invalid log filter '{}': {}", config.log_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| LeaderboardError::Config(format!("logging already initialized: {}", e)))
}
