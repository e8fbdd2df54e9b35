//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files into the [`AppConfig`] DTO
//! - Report I/O and parsing errors with context
//! - Resolve the effective config: defaults for empty facts, then
//!   environment overrides
//!
//! `load_config` never validates and never fills in defaults. Missing keys
//! come back as empty values; [`resolve_config`] decides what they mean.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gallery_core::config::AppConfig;

/// Directory name under the user's config and data directories.
pub const APP_DIR_NAME: &str = "image-gallery";

/// Overrides `[api] base_url`.
pub const ENV_API_BASE_URL: &str = "GALLERY_API_BASE_URL";
/// Overrides `[image_host] api_key`.
pub const ENV_IMAGE_HOST_KEY: &str = "GALLERY_IMAGE_HOST_KEY";

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config_dir>/image-gallery/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}

/// `<data_local_dir>/image-gallery`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Fill empty facts of `config` from `defaults`.
///
/// `file_logging` is taken from the file as-is.
pub fn apply_defaults(mut config: AppConfig, defaults: &AppConfig) -> AppConfig {
    if config.api_base_url.is_empty() {
        config.api_base_url = defaults.api_base_url.clone();
    }
    if config.image_host_upload_url.is_empty() {
        config.image_host_upload_url = defaults.image_host_upload_url.clone();
    }
    if config.image_host_api_key.is_empty() {
        config.image_host_api_key = defaults.image_host_api_key.clone();
    }
    if config.log_dir.as_os_str().is_empty() {
        config.log_dir = defaults.log_dir.clone();
    }
    config
}

/// Apply `GALLERY_*` overrides. Empty variables are ignored.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(url) = non_empty(ENV_API_BASE_URL) {
        config.api_base_url = url;
    }
    if let Some(key) = non_empty(ENV_IMAGE_HOST_KEY) {
        config.image_host_api_key = key;
    }
    config
}

/// Effective configuration for this process.
///
/// An explicit `config_path` must exist. Without one, the default path is
/// used when present; otherwise every value comes from the defaults.
pub fn resolve_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loaded = match config_path {
        Some(path) => Some(load_config(path.to_path_buf())?),
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => Some(load_config(path)?),
            None => None,
        },
    };

    let data_dir = default_data_dir().context("Could not determine the local data directory")?;
    let defaults = AppConfig::with_defaults(data_dir);
    let config = match loaded {
        Some(loaded) => apply_defaults(loaded, &defaults),
        None => defaults,
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}
