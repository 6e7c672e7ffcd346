//! Route endpoint types
//!
//! A `NavPoint` is one end of a requested route: a coordinate plus an
//! optional place name and address.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Marker for "no usable location", matching the platform location framework
    pub const INVALID: Coordinate = Coordinate {
        latitude: -180.0,
        longitude: -180.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    ///
    /// Device sentinels such as `-9999.0` fall outside the ranges and are
    /// treated as invalid.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `"<lat>,<lon>"` with six fractional digits each
    pub fn to_lat_lon_string(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::INVALID
    }
}

/// One endpoint of a route handed to a navigation app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    coordinate: Coordinate,
    name: String,
    address: String,
}

impl NavPoint {
    /// Create a point from its three parts
    pub fn new(coordinate: Coordinate, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
            address: address.into(),
        }
    }

    /// Create an unnamed point at the given position
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        Self::new(Coordinate::new(latitude, longitude), "", "")
    }

    /// Set the place name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the place address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn has_valid_coordinate(&self) -> bool {
        self.coordinate.is_valid()
    }
}
