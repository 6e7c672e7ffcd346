//! Deep-link builder
//!
//! Renders the URL each navigation app expects for a route. Every app has
//! its own parameter layout; the templates here must match what the apps
//! parse, byte for byte.

use serde::{Deserialize, Serialize};
use url::Url;

use super::encode::{coord_string, format_degrees, invalid_escape, is_url_char, url_encode};
use crate::apps::NavApp;
use crate::core::error::{Endpoint, LinkError};
use crate::core::types::NavPoint;

/// Navigon shows this label when the destination has no name
const DEFAULT_DESTINATION_NAME: &str = "Destination";

/// URL form used for HERE routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HereLinkStyle {
    /// `https://share.here.com/r/...`, handled by the app through universal links
    #[default]
    Share,
    /// `here-route://...`, for hosts predating universal links
    Legacy,
}

/// Rendering options that come from the host rather than the route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOptions {
    /// Value of Moovit's `partner_id`, normally the host bundle display name.
    ///
    /// Inserted without encoding, so it must already be URL-safe: a value
    /// such as `"My App"` makes every Moovit link fail validation.
    #[serde(default)]
    pub partner_id: String,

    /// HERE link flavour
    #[serde(default)]
    pub here_style: HereLinkStyle,
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = partner_id.into();
        self
    }

    pub fn with_here_style(mut self, style: HereLinkStyle) -> Self {
        self.here_style = style;
        self
    }
}

/// A rendered deep link that passed URL validation
#[derive(Debug, Clone)]
pub struct DeepLink {
    raw: String,
    url: Url,
}

impl DeepLink {
    /// Validate a rendered link.
    ///
    /// Rejects empty strings, characters that cannot appear literally in a
    /// URL (spaces, quotes, non-ASCII, ...), a `%` that does not start a
    /// two-hex-digit escape, and anything `url` cannot parse.
    /// The original text is kept as-is for opening.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        if raw.is_empty() {
            return Err(LinkError::MalformedUrl {
                url: String::new(),
                reason: "empty URL".to_string(),
            });
        }

        if let Some(bad) = raw.chars().find(|c| !is_url_char(*c)) {
            return Err(LinkError::MalformedUrl {
                url: raw.to_string(),
                reason: format!("illegal character {:?}", bad),
            });
        }

        if let Some(at) = invalid_escape(raw) {
            return Err(LinkError::MalformedUrl {
                url: raw.to_string(),
                reason: format!("invalid percent escape at byte {}", at),
            });
        }

        let url = Url::parse(raw).map_err(|e| LinkError::MalformedUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            url,
        })
    }

    /// The link exactly as rendered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// URL scheme, e.g. `waze`
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Parsed form of the link
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for DeepLink {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for DeepLink {}

impl std::fmt::Display for DeepLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Builds per-app deep links
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    options: LinkOptions,
}

impl LinkBuilder {
    /// Create a builder with the given options
    pub fn new(options: LinkOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Render and validate the deep link for `app`.
    ///
    /// `None` stands for a route end the caller did not supply. Only the
    /// Transit link accepts that outright; apps that always embed a point's
    /// coordinate fail if it is missing or invalid.
    pub fn build(
        &self,
        app: NavApp,
        from: Option<&NavPoint>,
        to: Option<&NavPoint>,
    ) -> Result<DeepLink, LinkError> {
        let raw = self.render(app, from, to)?;
        let link = DeepLink::parse(&raw)?;
        tracing::debug!(app = %app, url = %link, "Rendered deep link");
        Ok(link)
    }

    /// Render the link text without URL validation
    pub fn render(
        &self,
        app: NavApp,
        from: Option<&NavPoint>,
        to: Option<&NavPoint>,
    ) -> Result<String, LinkError> {
        let url = match app {
            NavApp::Native => format!(
                "http://maps.apple.com/?saddr={}&daddr={}&z=14",
                optional_coord_string(from),
                optional_coord_string(to)
            ),
            NavApp::Here => {
                let from = valid_point(app, Endpoint::From, from)?;
                let to = valid_point(app, Endpoint::To, to)?;
                let base = match self.options.here_style {
                    HereLinkStyle::Share => "https://share.here.com/r/",
                    HereLinkStyle::Legacy => "here-route://",
                };
                format!(
                    "{}{},{}/{},{}",
                    base,
                    from.coordinate().to_lat_lon_string(),
                    from.name(),
                    to.coordinate().to_lat_lon_string(),
                    to.name()
                )
            }
            NavApp::Google => format!(
                "comgooglemaps://?saddr={}&daddr={}",
                optional_coord_string(from),
                optional_coord_string(to)
            ),
            NavApp::Yandex => {
                let from = valid_point(app, Endpoint::From, from)?.coordinate();
                let to = valid_point(app, Endpoint::To, to)?.coordinate();
                format!(
                    "yandexnavi://build_route_on_map?lat_to={}&lon_to={}&lat_from={}&lon_from={}",
                    format_degrees(to.latitude),
                    format_degrees(to.longitude),
                    format_degrees(from.latitude),
                    format_degrees(from.longitude)
                )
            }
            NavApp::Citymapper => {
                let mut params = Vec::with_capacity(6);
                push_citymapper_params(&mut params, "start", from);
                push_citymapper_params(&mut params, "end", to);
                format!("citymapper://directions?{}", params.join("&"))
            }
            NavApp::Navigon => {
                let to = valid_point(app, Endpoint::To, to)?;
                let name = if to.name().is_empty() {
                    DEFAULT_DESTINATION_NAME
                } else {
                    to.name()
                };
                format!(
                    "navigon://coordinate/{}/{}/{}",
                    url_encode(name),
                    format_degrees(to.coordinate().longitude),
                    format_degrees(to.coordinate().latitude)
                )
            }
            NavApp::Transit => {
                let mut params = Vec::with_capacity(2);
                if let Some(from) = from {
                    params.push(format!("from={}", from.coordinate().to_lat_lon_string()));
                }
                if let Some(to) = to {
                    params.push(format!("to={}", to.coordinate().to_lat_lon_string()));
                }
                format!("transit://directions?{}", params.join("&"))
            }
            NavApp::Waze => {
                let to = valid_point(app, Endpoint::To, to)?;
                format!(
                    "waze://?ll={}&navigate=yes",
                    to.coordinate().to_lat_lon_string()
                )
            }
            NavApp::Moovit => {
                let from = valid_point(app, Endpoint::From, from)?;
                let to = valid_point(app, Endpoint::To, to)?;
                format!(
                    "moovit://directions?dest_lat={}&dest_lon={}&dest_name={}&orig_lat={}&orig_lon={}&orig_name={}&auto_run=true&partner_id={}",
                    format_degrees(to.coordinate().latitude),
                    format_degrees(to.coordinate().longitude),
                    url_encode(to.name()),
                    format_degrees(from.coordinate().latitude),
                    format_degrees(from.coordinate().longitude),
                    url_encode(from.name()),
                    self.options.partner_id
                )
            }
        };

        Ok(url)
    }
}

/// Coordinate string for a possibly absent point; absent reads like invalid
fn optional_coord_string(point: Option<&NavPoint>) -> String {
    point.map(coord_string).unwrap_or_default()
}

/// The point, provided it exists and has a usable coordinate
fn valid_point<'a>(
    app: NavApp,
    endpoint: Endpoint,
    point: Option<&'a NavPoint>,
) -> Result<&'a NavPoint, LinkError> {
    let point = point.ok_or(LinkError::MissingEndpoint { app, endpoint })?;
    if !point.has_valid_coordinate() {
        return Err(LinkError::InvalidCoordinate { app, endpoint });
    }
    Ok(point)
}

/// `<prefix>coord`, `<prefix>name`, `<prefix>address` for one route end.
/// Nothing is emitted for a point without a valid coordinate.
fn push_citymapper_params(params: &mut Vec<String>, prefix: &str, point: Option<&NavPoint>) {
    let Some(point) = point.filter(|p| p.has_valid_coordinate()) else {
        return;
    };

    params.push(format!(
        "{}coord={}",
        prefix,
        point.coordinate().to_lat_lon_string()
    ));
    if !point.name().is_empty() {
        params.push(format!("{}name={}", prefix, url_encode(point.name())));
    }
    if !point.address().is_empty() {
        params.push(format!("{}address={}", prefix, url_encode(point.address())));
    }
}
