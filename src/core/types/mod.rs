//! Core data types for MapLauncher
//!
//! Value objects shared by the registry, link builder and launcher.

pub mod point;

pub use point::{Coordinate, NavPoint};
