//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation beyond the explicit constructors below
//!
//! > **This module contains data only. Missing keys are facts, not errors.**

use std::path::PathBuf;

/// Default API base; the listing and create endpoints live under `images`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/";
/// Default imgbb-compatible upload endpoint.
pub const DEFAULT_IMAGE_HOST_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the gallery REST API (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Upload endpoint of the image host
    pub image_host_upload_url: String,

    /// API key sent to the image host
    pub image_host_api_key: String,

    /// Whether logs are also written to a file
    pub file_logging: bool,

    /// Directory for log files (path info only, no existence check)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            image_host_upload_url: str_at("image_host", "upload_url"),
            image_host_api_key: str_at("image_host", "api_key"),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            image_host_upload_url: String::new(),
            image_host_api_key: String::new(),
            file_logging: false,
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with default endpoints and paths derived from `data_dir`
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_defaults(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_host_upload_url: DEFAULT_IMAGE_HOST_UPLOAD_URL.to_string(),
            image_host_api_key: String::new(),
            file_logging: true,
            log_dir: data_dir.join("logs"),
        }
    }
}
