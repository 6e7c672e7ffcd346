//! MapLauncher - hand a route to whichever navigation app is installed
//!
//! This crate provides:
//! - A registry of supported navigation apps and their URL schemes
//! - Installed-app discovery through the host's scheme probe
//! - Per-app deep-link rendering
//! - A launcher that checks, renders and opens in one call
//! - JSON settings and `tracing`-based logging for embedding hosts

pub mod apps;
pub mod config;
pub mod core;
pub mod host;
pub mod launcher;
pub mod link;
pub mod logging;

// Re-export commonly used items
pub use apps::NavApp;
pub use config::{ConfigStore, ConfigStoreConfig, LauncherSettings};
pub use core::error::{LauncherError, LinkError, Result};
pub use core::types::{Coordinate, NavPoint};
pub use host::{CallbackHost, HostPlatform, StubHost};
pub use launcher::MapLauncher;
pub use link::{DeepLink, HereLinkStyle, LinkBuilder, LinkOptions};
pub use logging::{LoggingConfig, LoggingSystem};
