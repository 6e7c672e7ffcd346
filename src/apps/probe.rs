//! Availability probe
//!
//! Decides whether the host can open an app's URL scheme. The actual check
//! is a capability supplied by the caller.

use super::registry::{prefix_for, NavApp};

/// Check whether `app` is installed, asking `can_open` about its scheme prefix.
///
/// The native map app is always considered installed and `can_open` is not
/// consulted for it.
pub fn is_installed<F>(app: NavApp, can_open: F) -> bool
where
    F: Fn(&str) -> bool,
{
    if app == NavApp::Native {
        return true;
    }

    let prefix = prefix_for(app);
    if prefix.is_empty() {
        return false;
    }

    let installed = can_open(prefix);
    tracing::debug!(app = %app, prefix, installed, "Probed URL scheme");
    installed
}

/// Same as [`is_installed`], keyed by display name; unknown names are not installed
pub fn is_installed_by_name<F>(name: &str, can_open: F) -> bool
where
    F: Fn(&str) -> bool,
{
    match NavApp::from_display_name(name) {
        Some(app) => is_installed(app, can_open),
        None => {
            tracing::warn!("Unknown navigation app: {}", name);
            false
        }
    }
}
