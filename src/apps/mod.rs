//! Navigation App Module
//!
//! Provides:
//! - The closed set of supported navigation apps and their URL schemes
//! - Installation checks through a host-supplied scheme probe

mod probe;
mod registry;
#[cfg(test)]
mod tests;

pub use probe::{is_installed, is_installed_by_name};
pub use registry::{prefix_for, prefix_for_name, NavApp};
