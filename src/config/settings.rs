//! Application settings loading from config.toml
//!
//! The settings file is optional. It can override the database location and lists the
//! administrators to seed on startup, since administrators have no registration flow.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Overrides the default store location; `DATABASE_URL` still takes precedence
    #[serde(default)]
    pub database_url: Option<String>,
    /// Administrators to create if their login is not present yet
    #[serde(default)]
    pub administrators: Vec<AdministratorConfig>,
}

/// Configuration for a single administrator account
#[derive(Debug, Deserialize, Clone)]
pub struct AdministratorConfig {
    /// Given name
    pub name: String,
    /// Family name
    pub last_name: String,
    /// Login; an existing administrator with this login is left untouched
    pub login: String,
    /// Stored verbatim
    pub password: String,
    /// Contact phone
    pub phone: String,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings, falling back to defaults when the file does not exist.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        info!(
            "No configuration file at {}, using defaults.",
            path_ref.display()
        );
        return Ok(AppConfig::default());
    }
    load_config(path_ref)
}
