//! Map Launcher Module
//!
//! Provides functionality for:
//! - Discovering which navigation apps the host can open
//! - Handing a route to the chosen app through its deep link
//!
//! The installed-app list is computed once, when the launcher is created.
//! Build a new launcher to pick up apps installed afterwards.


use crate::apps::{self, NavApp};
use crate::core::error::LinkError;
use crate::core::types::NavPoint;
use crate::host::{HostPlatform, OpenOptions};
use crate::link::{DeepLink, LinkBuilder, LinkOptions};

/// Navigation app launcher bound to one host
pub struct MapLauncher<H: HostPlatform> {
    /// Platform capabilities
    host: H,
    /// Link renderer, with the partner id resolved
    builder: LinkBuilder,
    /// Apps found at construction, in registry order
    installed: Vec<NavApp>,
}

impl<H: HostPlatform> MapLauncher<H> {
    /// Create a launcher with default link options
    pub fn new(host: H) -> Self {
        Self::with_options(host, LinkOptions::default())
    }

    /// Create a launcher with explicit link options.
    ///
    /// An empty `partner_id` falls back to the host bundle display name.
    pub fn with_options(host: H, mut options: LinkOptions) -> Self {
        if options.partner_id.is_empty() {
            options.partner_id = host.bundle_display_name();
        }

        let installed: Vec<NavApp> = NavApp::ALL
            .into_iter()
            .filter(|app| apps::is_installed(*app, |url| host.can_open_url(url)))
            .collect();

        tracing::info!(
            "Map launcher ready, {} navigation app(s) available: {:?}",
            installed.len(),
            installed.iter().map(|a| a.display_name()).collect::<Vec<_>>()
        );

        Self {
            host,
            builder: LinkBuilder::new(options),
            installed,
        }
    }

    /// Probe the host for `app` right now; the cached list is not consulted
    pub fn is_map_app_installed(&self, app: NavApp) -> bool {
        apps::is_installed(app, |url| self.host.can_open_url(url))
    }

    /// Display names of the apps found at construction
    pub fn get_map_apps(&self) -> Vec<&'static str> {
        self.installed.iter().map(|app| app.display_name()).collect()
    }

    /// Apps found at construction
    pub fn installed_apps(&self) -> &[NavApp] {
        &self.installed
    }

    /// Render the deep link for a route, skipping the install check and the open call
    pub fn deep_link<'a>(
        &self,
        app: NavApp,
        from: impl Into<Option<&'a NavPoint>>,
        to: impl Into<Option<&'a NavPoint>>,
    ) -> Result<DeepLink, LinkError> {
        self.builder.build(app, from.into(), to.into())
    }

    /// Hand the route to `app`.
    ///
    /// Returns false without opening anything when the app is not installed
    /// or no valid link can be built. When the host offers asynchronous
    /// dispatch the result is true once the request was handed over, not once
    /// navigation actually started.
    pub fn launch_map_app<'a>(
        &self,
        app: NavApp,
        from: impl Into<Option<&'a NavPoint>>,
        to: impl Into<Option<&'a NavPoint>>,
    ) -> bool {
        if !self.is_map_app_installed(app) {
            tracing::debug!("{} is not installed, launch skipped", app);
            return false;
        }

        let link = match self.deep_link(app, from, to) {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!("Cannot launch {}: {}", app, e);
                return false;
            }
        };

        tracing::info!(app = %app, url = %link, "Launching navigation app");

        if self.host.supports_async_open() {
            self.host
                .open_url_async(link.as_str(), &OpenOptions::new(), None);
            true
        } else {
            let opened = self.host.open_url(link.as_str());
            if !opened {
                tracing::warn!("Host refused to open {}", link);
            }
            opened
        }
    }

    /// [`MapLauncher::launch_map_app`] keyed by display name; unknown names return false
    pub fn launch_by_name<'a>(
        &self,
        name: &str,
        from: impl Into<Option<&'a NavPoint>>,
        to: impl Into<Option<&'a NavPoint>>,
    ) -> bool {
        match NavApp::from_display_name(name) {
            Some(app) => self.launch_map_app(app, from, to),
            None => {
                tracing::warn!("Unknown navigation app: {}", name);
                false
            }
        }
    }

    /// Options used for rendering, including the resolved partner id
    pub fn link_options(&self) -> &LinkOptions {
        self.builder.options()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
