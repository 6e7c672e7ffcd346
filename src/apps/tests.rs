//! Tests for the navigation app registry and availability probe

use super::*;
use std::cell::{Cell, RefCell};

/// Exhaustive on purpose: adding a variant breaks this match until the
/// registry table and link builder are updated alongside it.
fn expected_prefix(app: NavApp) -> &'static str {
    match app {
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

#[test]
fn test_prefix_table() {
    for app in NavApp::ALL {
        assert_eq!(prefix_for(app), expected_prefix(app), "prefix for {:?}", app);
    }
}

#[test]
fn test_all_lists_each_variant_once() {
    let mut seen = std::collections::HashSet::new();
    for app in NavApp::ALL {
        assert!(seen.insert(app), "{:?} listed twice", app);
    }
    assert_eq!(seen.len(), 9);
    assert_eq!(NavApp::ALL[0], NavApp::Native);
}

#[test]
fn test_only_native_has_empty_prefix() {
    for app in NavApp::ALL {
        assert_eq!(app.url_prefix().is_empty(), app == NavApp::Native);
    }
}

#[test]
fn test_display_names() {
    let names: Vec<&str> = NavApp::ALL.iter().map(|a| a.display_name()).collect();
    assert_eq!(
        names,
        vec![
            "Apple Maps",
            "HERE Maps",
            "Google Maps",
            "Yandex Navigator",
            "Citymapper",
            "Navigon",
            "The Transit App",
            "Waze",
            "Moovit",
        ]
    );
}

#[test]
fn test_lookup_by_display_name() {
    for app in NavApp::ALL {
        assert_eq!(NavApp::from_display_name(app.display_name()), Some(app));
    }
    assert_eq!(NavApp::from_display_name("Bing Maps"), None);
    assert_eq!(NavApp::from_display_name("waze"), None);
}

#[test]
fn test_from_str_accepts_identifier_and_display_name() {
    assert_eq!("Waze".parse::<NavApp>().unwrap(), NavApp::Waze);
    assert_eq!("citymapper".parse::<NavApp>().unwrap(), NavApp::Citymapper);
    assert_eq!("The Transit App".parse::<NavApp>().unwrap(), NavApp::Transit);
    assert!("MapQuest".parse::<NavApp>().is_err());
}

#[test]
fn test_prefix_for_unknown_name_is_empty() {
    assert_eq!(prefix_for_name("MapQuest"), "");
    assert_eq!(prefix_for_name(""), "");
    assert_eq!(prefix_for_name("Google Maps"), "comgooglemaps://");
    assert_eq!(prefix_for_name("Apple Maps"), "");
}

#[test]
fn test_serde_uses_lowercase_identifier() {
    let json = serde_json::to_string(&NavApp::Citymapper).unwrap();
    assert_eq!(json, "\"citymapper\"");
    let app: NavApp = serde_json::from_str("\"moovit\"").unwrap();
    assert_eq!(app, NavApp::Moovit);
}

#[test]
fn test_native_is_installed_without_probing() {
    let calls = Cell::new(0);
    let installed = is_installed(NavApp::Native, |_| {
        calls.set(calls.get() + 1);
        false
    });
    assert!(installed);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_probe_asks_for_prefix() {
    let asked = RefCell::new(Vec::new());
    let installed = is_installed(NavApp::Google, |scheme| {
        asked.borrow_mut().push(scheme.to_string());
        true
    });
    assert!(installed);
    assert_eq!(asked.into_inner(), vec!["comgooglemaps://".to_string()]);
}

#[test]
fn test_probe_reports_capability_answer() {
    for app in NavApp::ALL.into_iter().filter(|a| *a != NavApp::Native) {
        assert!(!is_installed(app, |_| false));
        assert!(is_installed(app, |_| true));
    }
}

#[test]
fn test_probe_by_name() {
    assert!(is_installed_by_name("Apple Maps", |_| false));
    assert!(is_installed_by_name("Waze", |s| s == "waze://"));
    assert!(!is_installed_by_name("HERE Maps", |s| s == "waze://"));
    assert!(!is_installed_by_name("Unknown App", |_| true));
}
