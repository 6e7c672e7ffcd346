//! MapLauncher Core Module
//!
//! This module contains the shared building blocks:
//! - Error types
//! - Route endpoint value types

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{Endpoint, LauncherError, LinkError, Result};
pub use types::{Coordinate, NavPoint};
