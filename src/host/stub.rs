//! Stub host for platforms without deep-link support
//!
//! Reports no third-party apps and logs URLs instead of opening them, so
//! only the native map app is ever offered.

use super::HostPlatform;

/// Host that resolves no URL schemes
#[derive(Debug, Clone, Default)]
pub struct StubHost {
    bundle_name: String,
}

impl StubHost {
    /// Create a new stub host
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a bundle display name
    pub fn with_bundle_name(name: impl Into<String>) -> Self {
        Self {
            bundle_name: name.into(),
        }
    }
}

impl HostPlatform for StubHost {
    fn can_open_url(&self, _url: &str) -> bool {
        false
    }

    fn open_url(&self, url: &str) -> bool {
        tracing::warn!("URL dispatch not supported on this platform, dropping {}", url);
        true
    }

    fn bundle_display_name(&self) -> String {
        self.bundle_name.clone()
    }
}
