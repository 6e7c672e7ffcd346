//! Configuration Storage Implementation
//!
//! Provides JSON file-based settings storage with:
//! - Atomic writes using temp file + rename
//! - Validation before anything reaches disk
//! - Default settings generation

use crate::link::{HereLinkStyle, LinkOptions};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings layout version understood by this build
pub const CURRENT_VERSION: u32 = 1;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration store settings
#[derive(Debug, Clone)]
pub struct ConfigStoreConfig {
    /// Path to the settings file
    pub config_path: PathBuf,
    /// Whether to write default settings if the file does not exist
    pub create_default: bool,
}

impl ConfigStoreConfig {
    /// Store settings pointing at an explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            create_default: false,
        }
    }

    pub fn with_create_default(mut self, create: bool) -> Self {
        self.create_default = create;
        self
    }
}

impl Default for ConfigStoreConfig {
    fn default() -> Self {
        let app_data = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maplauncher");

        Self {
            config_path: app_data.join("settings.json"),
            create_default: true,
        }
    }
}

/// Persistent launcher settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Settings layout version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Partner id sent to Moovit; the host bundle name is used when unset
    #[serde(default)]
    pub partner_id: Option<String>,

    /// Which HERE link form to emit
    #[serde(default)]
    pub here_style: HereLinkStyle,

    /// URL prefixes the demo host reports as openable
    #[serde(default)]
    pub installed_schemes: Vec<String>,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            partner_id: None,
            here_style: HereLinkStyle::default(),
            installed_schemes: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl LauncherSettings {
    /// Check the settings before they are used or persisted
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version != CURRENT_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported settings version {} (expected {})",
                self.version, CURRENT_VERSION
            )));
        }

        if let Some(scheme) = self
            .installed_schemes
            .iter()
            .find(|s| !s.ends_with("://") || s.len() == "://".len())
        {
            return Err(ConfigError::Invalid(format!(
                "installed scheme {:?} must look like \"name://\"",
                scheme
            )));
        }

        Ok(())
    }

    /// Link rendering options derived from these settings
    pub fn link_options(&self) -> LinkOptions {
        let options = LinkOptions::new().with_here_style(self.here_style);
        match self.partner_id.as_deref() {
            Some(partner) if !partner.is_empty() => options.with_partner_id(partner),
            _ => options,
        }
    }
}

/// JSON-backed settings store
#[derive(Debug, Clone)]
pub struct ConfigStore {
    settings: ConfigStoreConfig,
}

impl ConfigStore {
    /// Create a new configuration store
    pub fn new(settings: ConfigStoreConfig) -> Self {
        Self { settings }
    }

    /// Read settings from disk.
    ///
    /// A missing file yields defaults, written back when `create_default` is set.
    pub fn load(&self) -> ConfigResult<LauncherSettings> {
        let path = &self.settings.config_path;

        if !path.exists() {
            let defaults = LauncherSettings::default();
            if self.settings.create_default {
                tracing::info!("Creating default settings at {:?}", path);
                Self::save_to_file(path, &defaults)?;
            } else {
                tracing::debug!("No settings file at {:?}, using defaults", path);
            }
            return Ok(defaults);
        }

        let settings = Self::load_from_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings, failing when the file does not exist
    pub fn load_existing(&self) -> ConfigResult<LauncherSettings> {
        let path = &self.settings.config_path;
        if !path.exists() {
            return Err(ConfigError::NotFound(path.clone()));
        }
        let settings = Self::load_from_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate and persist settings
    pub fn save(&self, settings: &LauncherSettings) -> ConfigResult<()> {
        settings.validate()?;
        Self::save_to_file(&self.settings.config_path, settings)
    }

    /// Get settings file path
    pub fn config_path(&self) -> &Path {
        &self.settings.config_path
    }

    fn load_from_file(path: &Path) -> ConfigResult<LauncherSettings> {
        let content = std::fs::read_to_string(path)?;
        let settings: LauncherSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to file with atomic write
    fn save_to_file(path: &Path, settings: &LauncherSettings) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(settings)?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, path)?;

        Ok(())
    }
}
