//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: command line, then `RUST_LOG`, then config.
pub fn resolve_directive(cli: Option<&str>, env: Option<&str>, config: &str) -> String {
    cli.or(env)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or(config)
        .to_string()
}

/// Install the global fmt subscriber writing to stderr
pub fn init(cli_level: Option<&str>, config_level: &str) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(cli_level, env.as_deref(), config_level);

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("Invalid log filter `{directive}`: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
