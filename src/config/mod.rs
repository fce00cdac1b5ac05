pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    normalize_config(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from `path`, writing a default config there first if the file
/// does not exist yet
pub fn load_or_create(path: &Path) -> Result<Config> {
    if path.exists() {
        return load_config(path);
    }

    tracing::info!("Config file {:?} not found, creating default", path);
    let config = Config::default();
    persist::save_config(path, &config)?;
    Ok(config)
}

fn normalize_config(config: &mut Config) {
    if config.media.media_path.as_os_str().is_empty() {
        config.media.media_path = default_media_path();
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    let base = &config.media.base_route;
    if !base.starts_with('/') {
        anyhow::bail!("Base route '{}' must start with '/'", base);
    }
    if base.len() < 2 || base.ends_with('/') {
        anyhow::bail!(
            "Base route '{}' must name a path segment and not end with '/'",
            base
        );
    }
    // The router would read these as path parameters
    if base.contains(|c: char| c == ':' || c == '*') {
        anyhow::bail!("Base route '{}' must not contain ':' or '*'", base);
    }

    Ok(())
}
