//! Configuration Management Module for MapLauncher
//!
//! Provides persistent settings storage with:
//! - JSON file-based storage
//! - Validation on load and save
//! - Conversion into link rendering options

mod storage;

pub use storage::{
    ConfigError, ConfigResult, ConfigStore, ConfigStoreConfig, LauncherSettings,
    CURRENT_VERSION,
};
