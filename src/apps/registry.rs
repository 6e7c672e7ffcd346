//! Navigation app registry
//!
//! Fixed table of supported apps with their display names and URL scheme
//! prefixes. Registry order is the order the launcher reports installed apps.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::LauncherError;

/// Supported navigation applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavApp {
    /// The OS map app, always present
    Native,
    Here,
    Google,
    Yandex,
    Citymapper,
    Navigon,
    Transit,
    Waze,
    Moovit,
}

impl NavApp {
    /// Every app, in registry order
    pub const ALL: [NavApp; 9] = [
        NavApp::Native,
        NavApp::Here,
        NavApp::Google,
        NavApp::Yandex,
        NavApp::Citymapper,
        NavApp::Navigon,
        NavApp::Transit,
        NavApp::Waze,
        NavApp::Moovit,
    ];

    /// Name shown to the user when picking an app
    pub fn display_name(&self) -> &'static str {
        match self {
            NavApp::Native => "Apple Maps",
            NavApp::Here => "HERE Maps",
            NavApp::Google => "Google Maps",
            NavApp::Yandex => "Yandex Navigator",
            NavApp::Citymapper => "Citymapper",
            NavApp::Navigon => "Navigon",
            NavApp::Transit => "The Transit App",
            NavApp::Waze => "Waze",
            NavApp::Moovit => "Moovit",
        }
    }

    /// URL scheme prefix probed to detect the app.
    ///
    /// Empty for `Native`: no probe is needed, it is always available.
    pub fn url_prefix(&self) -> &'static str {
        match self {
            NavApp::Native => "",
            NavApp::Here => "here-route://",
            NavApp::Google => "comgooglemaps://",
            NavApp::Yandex => "yandexnavi://",
            NavApp::Citymapper => "citymapper://",
            NavApp::Navigon => "navigon://",
            NavApp::Transit => "transit://",
            NavApp::Waze => "waze://",
            NavApp::Moovit => "moovit://",
        }
    }

    /// Look an app up by its display name
    pub fn from_display_name(name: &str) -> Option<NavApp> {
        Self::ALL.into_iter().find(|app| app.display_name() == name)
    }
}

impl std::fmt::Display for NavApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NavApp {
    type Err = LauncherError;

    /// Accepts the display name or the lowercase identifier (`"waze"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|app| format!("{:?}", app).eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| LauncherError::UnknownApp { name: s.to_string() })
    }
}

/// Scheme prefix for an app
pub fn prefix_for(app: NavApp) -> &'static str {
    app.url_prefix()
}

/// Scheme prefix for a display name; empty for names the registry does not know
pub fn prefix_for_name(name: &str) -> &'static str {
    NavApp::from_display_name(name)
        .map(|app| app.url_prefix())
        .unwrap_or("")
}
