pub mod models;

pub use models::*;

use std::path::{Path, PathBuf};

use crate::types::errors::{LinkError, LinkResult};

/// Overrides `schedule_dir`.
pub const ENV_SCHEDULE_DIR: &str = "TKB_LINK_DIR";
/// Overrides `parallel` (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`).
pub const ENV_PARALLEL: &str = "TKB_LINK_PARALLEL";
/// Overrides `cache_listing`, same values as [`ENV_PARALLEL`].
pub const ENV_CACHE_LISTING: &str = "TKB_LINK_CACHE";

/// Load the process configuration: defaults, then the JSON file (if given),
/// then environment overrides. Call once at startup.
pub fn load_config(path: Option<&Path>) -> LinkResult<LinkerConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => LinkerConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Read a JSON config file. Absent keys keep their defaults.
pub fn read_config_file(path: &Path) -> LinkResult<LinkerConfig> {
    log::info!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        LinkError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| LinkError::Config(format!("Invalid config {}: {e}", path.display())))
}

/// Apply environment overrides through `lookup`. Unparseable flags are
/// ignored with a warning.
pub fn apply_env_overrides<F>(config: &mut LinkerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_SCHEDULE_DIR).filter(|v| !v.trim().is_empty()) {
        config.schedule_dir = Some(PathBuf::from(dir.trim()));
    }

    if let Some(raw) = lookup(ENV_PARALLEL) {
        match parse_flag(&raw) {
            Some(flag) => config.parallel = flag,
            None => log::warn!("Ignoring {ENV_PARALLEL}={raw:?}: not a boolean"),
        }
    }

    if let Some(raw) = lookup(ENV_CACHE_LISTING) {
        match parse_flag(&raw) {
            Some(flag) => config.cache_listing = flag,
            None => log::warn!("Ignoring {ENV_CACHE_LISTING}={raw:?}: not a boolean"),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
