//! Deep Link Module
//!
//! Turns a route (two `NavPoint`s) into the URL a navigation app accepts:
//! - Per-app URL templates
//! - Coordinate strings and query-value encoding
//! - Validation of the rendered URL before it is handed to the host

mod builder;
mod encode;
#[cfg(test)]
mod tests;

pub use builder::{DeepLink, HereLinkStyle, LinkBuilder, LinkOptions};
pub use encode::{coord_string, format_degrees, url_encode};
