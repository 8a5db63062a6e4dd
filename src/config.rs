//! Configuration management for the lending core

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Admin username of the composition-enforcing variant
pub const DEFAULT_ADMIN_USERNAME: &str = "Admin123@";
/// Admin username when username composition is not enforced
pub const LEGACY_ADMIN_USERNAME: &str = "admin";

/// Registry bounds
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_books: usize,
    pub max_users: usize,
    /// Maximum number of books one user may hold at once
    pub max_borrowed: usize,
}

/// Variant switches
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeaturesConfig {
    pub enforce_username_composition: bool,
    pub store_content: bool,
    pub seed_sample_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AdminConfig {
    /// Reserved username allowed to add books
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LibraryConfig {
    pub limits: LimitsConfig,
    pub features: FeaturesConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

impl LibraryConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. LIBRARY_LIMITS__MAX_BORROWED=3
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The reserved admin identity, falling back to the variant default
    pub fn admin_username(&self) -> &str {
        match self.admin.username.as_deref() {
            Some(username) => username,
            None if self.features.enforce_username_composition => DEFAULT_ADMIN_USERNAME,
            None => LEGACY_ADMIN_USERNAME,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_books: 100,
            max_users: 50,
            max_borrowed: 5,
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            enforce_username_composition: true,
            store_content: true,
            seed_sample_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
