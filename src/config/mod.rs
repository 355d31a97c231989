//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Role;
use crate::registry::{RegistryError, TagRegistry};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Match records to analyze when no input is given on the command line
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Champion tags file replacing the built-in table
    #[serde(default)]
    pub tags_file: Option<PathBuf>,

    /// Roles to include in lane checks (empty = all)
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/sample_matches.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            tags_file: None,
            roles: Vec::new(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_file must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        self.role_filter()?;
        Ok(())
    }

    /// Parsed role filter.
    pub fn role_filter(&self) -> Result<Vec<Role>, ConfigError> {
        parse_roles(self.roles.iter().map(String::as_str))
    }

    /// Tag registry from `tags_file`, or the built-in table.
    pub fn tag_registry(&self) -> Result<TagRegistry, RegistryError> {
        match &self.tags_file {
            Some(path) => TagRegistry::from_file(path),
            None => Ok(TagRegistry::builtin()),
        }
    }
}

/// Parse role names, rejecting anything that is not a role.
pub fn parse_roles<'a, I>(names: I) -> Result<Vec<Role>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| {
            Role::parse(name)
                .ok_or_else(|| ConfigError::ValidationError(format!("Unknown role: {}", name)))
        })
        .collect()
}
