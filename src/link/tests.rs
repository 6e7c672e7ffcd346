//! Tests for deep-link rendering
//!
//! Includes property-based tests for:
//! - Rendering determinism
//! - Encoder output alphabet and pass-through of query-safe text

use super::*;
use crate::apps::NavApp;
use crate::core::error::{Endpoint, LinkError};
use crate::core::types::{Coordinate, NavPoint};
use proptest::prelude::*;

fn from_point() -> NavPoint {
    NavPoint::from_lat_lon(10.0, 10.0)
        .with_name("FromName")
        .with_address("fromAddress")
}

fn to_point() -> NavPoint {
    NavPoint::from_lat_lon(20.0, 20.0)
        .with_name("ToName")
        .with_address("ToAddress")
}

fn invalid_point() -> NavPoint {
    NavPoint::new(Coordinate::new(-9999.99, -9999.0), "Nowhere", "Unknown Street")
}

fn build(app: NavApp, from: &NavPoint, to: &NavPoint) -> String {
    LinkBuilder::new(LinkOptions::new().with_partner_id("MapLauncherDemo"))
        .build(app, Some(from), Some(to))
        .unwrap()
        .into_string()
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_coord_string_with_name() {
    let point = NavPoint::new(Coordinate::new(10.0, 10.0), "TestName", "TestAddress");
    assert_eq!(coord_string(&point), "10.000000,10.000000+(TestName)");
}

#[test]
fn test_coord_string_invalid_location() {
    let point = NavPoint::new(Coordinate::new(-9999.99, -9999.0), "TestName", "TestAddress");
    assert_eq!(coord_string(&point), "");
}

#[test]
fn test_coord_string_without_name() {
    let point = NavPoint::new(Coordinate::new(10.0, 10.0), "", "TestAddress");
    assert_eq!(coord_string(&point), "10.000000,10.000000");
}

#[test]
fn test_coord_string_encodes_name() {
    let point = NavPoint::from_lat_lon(41.0, 29.0).with_name("Hagia Sophia");
    assert_eq!(coord_string(&point), "41.000000,29.000000+(Hagia%20Sophia)");
}

#[test]
fn test_url_encode_keeps_url_shaped_text() {
    assert_eq!(
        url_encode("http://github.com/abdullahselek"),
        "http://github.com/abdullahselek"
    );
}

#[test]
fn test_url_encode_escapes_space_and_unsafe_characters() {
    assert_eq!(url_encode("Main Street"), "Main%20Street");
    assert_eq!(url_encode("a\"b<c>"), "a%22b%3Cc%3E");
    assert_eq!(url_encode("50% off #1"), "50%25%20off%20%231");
    assert_eq!(url_encode("Café"), "Caf%C3%A9");
    assert_eq!(url_encode("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(url_encode(""), "");
}

#[test]
fn test_format_degrees() {
    assert_eq!(format_degrees(10.0), "10.000000");
    assert_eq!(format_degrees(-0.5), "-0.500000");
    assert_eq!(format_degrees(179.9999999), "180.000000");
}

// ============================================================================
// Per-app templates
// ============================================================================

#[test]
fn test_native_link() {
    assert_eq!(
        build(NavApp::Native, &from_point(), &to_point()),
        "http://maps.apple.com/?saddr=10.000000,10.000000+(FromName)&daddr=20.000000,20.000000+(ToName)&z=14"
    );
}

#[test]
fn test_native_link_degrades_for_invalid_source() {
    assert_eq!(
        build(NavApp::Native, &invalid_point(), &to_point()),
        "http://maps.apple.com/?saddr=&daddr=20.000000,20.000000+(ToName)&z=14"
    );
}

#[test]
fn test_here_share_link() {
    assert_eq!(
        build(NavApp::Here, &from_point(), &to_point()),
        "https://share.here.com/r/10.000000,10.000000,FromName/20.000000,20.000000,ToName"
    );
}

#[test]
fn test_here_legacy_link() {
    let builder = LinkBuilder::new(LinkOptions::new().with_here_style(HereLinkStyle::Legacy));
    let link = builder
        .build(NavApp::Here, Some(&from_point()), Some(&to_point()))
        .unwrap();
    assert_eq!(
        link.as_str(),
        "here-route://10.000000,10.000000,FromName/20.000000,20.000000,ToName"
    );
    assert_eq!(link.scheme(), "here-route");
}

#[test]
fn test_here_inserts_names_raw() {
    let from = NavPoint::from_lat_lon(10.0, 10.0).with_name("Old Town");
    let builder = LinkBuilder::default();

    let raw = builder
        .render(NavApp::Here, Some(&from), Some(&to_point()))
        .unwrap();
    assert!(raw.contains(",Old Town/"));

    // Raw spaces cannot travel in a URL
    let err = builder
        .build(NavApp::Here, Some(&from), Some(&to_point()))
        .unwrap_err();
    assert!(matches!(err, LinkError::MalformedUrl { .. }));
}

#[test]
fn test_here_name_with_bare_percent_is_rejected() {
    let from = NavPoint::from_lat_lon(1.0, 2.0).with_name("100%");
    let err = LinkBuilder::default()
        .build(NavApp::Here, Some(&from), Some(&to_point()))
        .unwrap_err();
    assert!(matches!(err, LinkError::MalformedUrl { .. }));
}

#[test]
fn test_google_link() {
    assert_eq!(
        build(NavApp::Google, &from_point(), &to_point()),
        "comgooglemaps://?saddr=10.000000,10.000000+(FromName)&daddr=20.000000,20.000000+(ToName)"
    );
}

#[test]
fn test_yandex_link_puts_destination_first() {
    assert_eq!(
        build(NavApp::Yandex, &from_point(), &to_point()),
        "yandexnavi://build_route_on_map?lat_to=20.000000&lon_to=20.000000&lat_from=10.000000&lon_from=10.000000"
    );
}

#[test]
fn test_citymapper_link() {
    assert_eq!(
        build(NavApp::Citymapper, &from_point(), &to_point()),
        "citymapper://directions?startcoord=10.000000,10.000000&startname=FromName&startaddress=fromAddress&endcoord=20.000000,20.000000&endname=ToName&endaddress=ToAddress"
    );
}

#[test]
fn test_citymapper_skips_invalid_point_entirely() {
    assert_eq!(
        build(NavApp::Citymapper, &invalid_point(), &to_point()),
        "citymapper://directions?endcoord=20.000000,20.000000&endname=ToName&endaddress=ToAddress"
    );
}

#[test]
fn test_citymapper_omits_empty_name_and_address() {
    let from = NavPoint::from_lat_lon(10.0, 10.0);
    let to = NavPoint::from_lat_lon(20.0, 20.0).with_address("1 Main Street");
    assert_eq!(
        build(NavApp::Citymapper, &from, &to),
        "citymapper://directions?startcoord=10.000000,10.000000&endcoord=20.000000,20.000000&endaddress=1%20Main%20Street"
    );
}

#[test]
fn test_citymapper_with_no_usable_points() {
    assert_eq!(
        build(NavApp::Citymapper, &invalid_point(), &invalid_point()),
        "citymapper://directions?"
    );
}

#[test]
fn test_navigon_link() {
    assert_eq!(
        build(NavApp::Navigon, &from_point(), &to_point()),
        "navigon://coordinate/ToName/20.000000/20.000000"
    );
}

#[test]
fn test_navigon_uses_longitude_before_latitude_and_default_name() {
    let to = NavPoint::from_lat_lon(48.5, 9.25);
    assert_eq!(
        build(NavApp::Navigon, &from_point(), &to),
        "navigon://coordinate/Destination/9.250000/48.500000"
    );
}

#[test]
fn test_transit_link() {
    assert_eq!(
        build(NavApp::Transit, &from_point(), &to_point()),
        "transit://directions?from=10.000000,10.000000&to=20.000000,20.000000"
    );
}

#[test]
fn test_transit_omits_absent_points() {
    let builder = LinkBuilder::default();
    let link = builder.build(NavApp::Transit, None, Some(&to_point())).unwrap();
    assert_eq!(link.as_str(), "transit://directions?to=20.000000,20.000000");

    let link = builder.build(NavApp::Transit, Some(&from_point()), None).unwrap();
    assert_eq!(link.as_str(), "transit://directions?from=10.000000,10.000000");

    let link = builder.build(NavApp::Transit, None, None).unwrap();
    assert_eq!(link.as_str(), "transit://directions?");
}

#[test]
fn test_transit_does_not_check_validity() {
    let from = NavPoint::from_lat_lon(-9999.0, 10.0);
    assert_eq!(
        build(NavApp::Transit, &from, &to_point()),
        "transit://directions?from=-9999.000000,10.000000&to=20.000000,20.000000"
    );
}

#[test]
fn test_waze_link_ignores_source() {
    assert_eq!(
        build(NavApp::Waze, &invalid_point(), &to_point()),
        "waze://?ll=20.000000,20.000000&navigate=yes"
    );
}

#[test]
fn test_moovit_link() {
    assert_eq!(
        build(NavApp::Moovit, &from_point(), &to_point()),
        "moovit://directions?dest_lat=20.000000&dest_lon=20.000000&dest_name=ToName&orig_lat=10.000000&orig_lon=10.000000&orig_name=FromName&auto_run=true&partner_id=MapLauncherDemo"
    );
}

#[test]
fn test_moovit_encodes_names() {
    let from = NavPoint::from_lat_lon(10.0, 10.0).with_name("Home Sweet Home");
    let to = NavPoint::from_lat_lon(20.0, 20.0);
    let link = build(NavApp::Moovit, &from, &to);
    assert!(link.contains("&dest_name=&"));
    assert!(link.contains("&orig_name=Home%20Sweet%20Home&"));
}

#[test]
fn test_moovit_partner_id_is_not_encoded() {
    let builder = LinkBuilder::new(LinkOptions::new().with_partner_id("My App"));
    let raw = builder
        .render(NavApp::Moovit, Some(&from_point()), Some(&to_point()))
        .unwrap();
    assert!(raw.ends_with("&partner_id=My App"));

    let err = builder
        .build(NavApp::Moovit, Some(&from_point()), Some(&to_point()))
        .unwrap_err();
    assert!(matches!(err, LinkError::MalformedUrl { .. }));

    // Pre-encoded ids pass through untouched
    let link = LinkBuilder::new(LinkOptions::new().with_partner_id("My%20App"))
        .build(NavApp::Moovit, Some(&from_point()), Some(&to_point()))
        .unwrap();
    assert!(link.as_str().ends_with("&partner_id=My%20App"));
}

// ============================================================================
// Failure rules
// ============================================================================

#[test]
fn test_apps_embedding_coordinates_reject_invalid_points() {
    let builder = LinkBuilder::default();
    let cases = [
        (NavApp::Here, Endpoint::From),
        (NavApp::Yandex, Endpoint::From),
        (NavApp::Moovit, Endpoint::From),
    ];
    for (app, endpoint) in cases {
        let err = builder
            .build(app, Some(&invalid_point()), Some(&to_point()))
            .unwrap_err();
        assert_eq!(err, LinkError::InvalidCoordinate { app, endpoint });
    }

    for app in [NavApp::Navigon, NavApp::Waze, NavApp::Yandex] {
        let err = builder
            .build(app, Some(&from_point()), Some(&invalid_point()))
            .unwrap_err();
        assert_eq!(
            err,
            LinkError::InvalidCoordinate {
                app,
                endpoint: Endpoint::To
            }
        );
    }
}

#[test]
fn test_missing_required_point() {
    let builder = LinkBuilder::default();
    let err = builder.build(NavApp::Waze, Some(&from_point()), None).unwrap_err();
    assert_eq!(
        err,
        LinkError::MissingEndpoint {
            app: NavApp::Waze,
            endpoint: Endpoint::To
        }
    );

    let err = builder.build(NavApp::Moovit, None, Some(&to_point())).unwrap_err();
    assert_eq!(
        err,
        LinkError::MissingEndpoint {
            app: NavApp::Moovit,
            endpoint: Endpoint::From
        }
    );
}

#[test]
fn test_degrading_apps_accept_missing_points() {
    let builder = LinkBuilder::default();
    let link = builder.build(NavApp::Google, None, Some(&to_point())).unwrap();
    assert_eq!(
        link.as_str(),
        "comgooglemaps://?saddr=&daddr=20.000000,20.000000+(ToName)"
    );

    let link = builder.build(NavApp::Citymapper, None, None).unwrap();
    assert_eq!(link.as_str(), "citymapper://directions?");
}

#[test]
fn test_every_app_builds_for_a_plain_route() {
    let builder = LinkBuilder::new(LinkOptions::new().with_partner_id("Demo"));
    for app in NavApp::ALL {
        let link = builder
            .build(app, Some(&from_point()), Some(&to_point()))
            .unwrap_or_else(|e| panic!("{:?} failed: {}", app, e));
        assert!(!link.as_str().is_empty());
    }
}

#[test]
fn test_deep_link_parse_rejects_bad_input() {
    assert!(DeepLink::parse("").is_err());
    assert!(DeepLink::parse("waze://?ll=1,2&q=two words").is_err());
    assert!(DeepLink::parse("no scheme here").is_err());
    assert!(DeepLink::parse("relative/path").is_err());
    assert!(DeepLink::parse("waze://?q=100%").is_err());
    assert!(DeepLink::parse("waze://?q=%2").is_err());
    assert!(DeepLink::parse("waze://?q=%zz1").is_err());
    assert!(DeepLink::parse("waze://?q=Caf%C3%A9&r=%2f").is_ok());
    assert!(DeepLink::parse("waze://?ll=1.000000,2.000000&navigate=yes").is_ok());
}

// ============================================================================
// Property-based tests
// ============================================================================

fn arb_point() -> impl Strategy<Value = NavPoint> {
    (
        -120.0f64..120.0,
        -200.0f64..200.0,
        "[A-Za-z ]{0,12}",
        "[A-Za-z0-9 ,]{0,16}",
    )
        .prop_map(|(lat, lon, name, address)| {
            NavPoint::new(Coordinate::new(lat, lon), name, address)
        })
}

fn arb_app() -> impl Strategy<Value = NavApp> {
    (0usize..NavApp::ALL.len()).prop_map(|i| NavApp::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rendering the same route twice gives byte-identical output
    #[test]
    fn build_is_deterministic(app in arb_app(), from in arb_point(), to in arb_point()) {
        let builder = LinkBuilder::new(LinkOptions::new().with_partner_id("Demo"));
        let first = builder.build(app, Some(&from), Some(&to));
        let second = builder.build(app, Some(&from), Some(&to));
        prop_assert_eq!(first, second);
    }

    /// Encoded values contain only query-safe characters and escapes
    #[test]
    fn url_encode_output_is_query_safe(input in "\\PC{0,24}") {
        let encoded = url_encode(&input);
        for c in encoded.chars() {
            prop_assert!(
                c.is_ascii_alphanumeric() || "!$&'()*+,-./:;=?@_~%".contains(c),
                "unexpected {:?} in {:?}", c, encoded
            );
        }
    }

    /// Text made only of query-safe characters passes through unchanged
    #[test]
    fn url_encode_keeps_safe_text(input in "[A-Za-z0-9!$&'()*+,./:;=?@_~-]{0,40}") {
        prop_assert_eq!(url_encode(&input), input);
    }

    /// Encoded names never break Citymapper link validation
    #[test]
    fn citymapper_links_always_validate(from in arb_point(), to in arb_point()) {
        let builder = LinkBuilder::default();
        prop_assert!(builder.build(NavApp::Citymapper, Some(&from), Some(&to)).is_ok());
    }
}
