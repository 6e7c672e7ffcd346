//! Error types for MapLauncher
//!
//! The launcher's public surface reports plain booleans; these types carry
//! the reason a link could not be produced so it can be logged or surfaced
//! by hosts that ask for the link directly.

use thiserror::Error;

use crate::apps::NavApp;
use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Result type alias for MapLauncher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Main error type for MapLauncher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Unknown navigation app: {name}")]
    UnknownApp { name: String },
}

/// Which side of the route a point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::From => write!(f, "from"),
            Endpoint::To => write!(f, "to"),
        }
    }
}

/// Deep-link construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    #[error("{app} requires a valid {endpoint} coordinate")]
    InvalidCoordinate { app: NavApp, endpoint: Endpoint },

    #[error("{app} requires a {endpoint} point")]
    MissingEndpoint { app: NavApp, endpoint: Endpoint },

    #[error("Malformed deep link {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_error_messages() {
        let err = LinkError::InvalidCoordinate {
            app: NavApp::Waze,
            endpoint: Endpoint::To,
        };
        assert_eq!(err.to_string(), "Waze requires a valid to coordinate");

        let err = LinkError::MissingEndpoint {
            app: NavApp::Yandex,
            endpoint: Endpoint::From,
        };
        assert_eq!(err.to_string(), "Yandex Navigator requires a from point");
    }

    #[test]
    fn test_launcher_error_wraps_link_error() {
        let err: LauncherError = LinkError::MalformedUrl {
            url: String::new(),
            reason: "empty".to_string(),
        }
        .into();
        assert!(matches!(err, LauncherError::Link(_)));
        assert!(err.to_string().starts_with("Link error: Malformed deep link"));
    }

    #[test]
    fn test_io_failures_arrive_through_config() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LauncherError = ConfigError::from(io).into();
        assert!(matches!(err, LauncherError::Config(ConfigError::Io(_))));
        assert_eq!(err.to_string(), "Configuration error: IO error: read-only");
    }
}
