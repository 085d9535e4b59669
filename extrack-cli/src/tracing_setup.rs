//! Tracing setup for the extrack CLI
//!
//! Usage:
//!   extrack serve                     # info-level logs
//!   extrack --debug serve             # debug logs with targets
//!   RUST_LOG=extrack_server=debug,tower_http=debug extrack serve

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used unless RUST_LOG is set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_picks_directive() {
        assert_eq!(TracingConfig::default().default_directive(), "info");
        assert_eq!(TracingConfig { debug: true }.default_directive(), "debug");
    }
}
