//! # Geo-Codes
//!
//! A [`GeoCode`] restricts a search to tweets posted within a radius of a
//! point. The endpoint expects it as `latitude,longitude,radius` with a `km`
//! or `mi` suffix on the radius. Coordinates are passed through unchecked.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unit of the geo-code radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers (`km`).
    #[default]
    Kilometers,
    /// Statute miles (`mi`).
    Miles,
}

impl DistanceUnit {
    /// Radius suffix used in the `geocode` request parameter.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A location filter: tweets within `radius` of (`latitude`, `longitude`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCode {
    /// Latitude of the center point, in degrees.
    pub latitude: f64,
    /// Longitude of the center point, in degrees.
    pub longitude: f64,
    /// Search radius around the center point.
    pub radius: f64,
    /// Unit of `radius`.
    pub unit: DistanceUnit,
}

impl GeoCode {
    /// Create a geo-code from its components.
    pub fn new(latitude: f64, longitude: f64, radius: f64, unit: DistanceUnit) -> Self {
        Self {
            latitude,
            longitude,
            radius,
            unit,
        }
    }

    /// Value of the `geocode` request parameter, e.g. `37.781157,-122.398720,1mi`.
    pub fn to_query_value(&self) -> String {
        format!(
            "{},{},{}{}",
            self.latitude,
            self.longitude,
            self.radius,
            self.unit.suffix()
        )
    }
}

impl std::fmt::Display for GeoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl std::str::FromStr for GeoCode {
    type Err = ValidationError;

    /// Parse the `lat,long,radius(km|mi)` form produced by [`GeoCode::to_query_value`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidGeoCode {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [lat, long, radius] = parts.as_slice() else {
            return Err(invalid("expected latitude,longitude,radius"));
        };

        let (amount, unit) = if let Some(amount) = radius.strip_suffix("km") {
            (amount, DistanceUnit::Kilometers)
        } else if let Some(amount) = radius.strip_suffix("mi") {
            (amount, DistanceUnit::Miles)
        } else {
            return Err(invalid("radius must end in km or mi"));
        };

        let latitude = lat.parse().map_err(|_| invalid("latitude is not a number"))?;
        let longitude = long
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;
        let radius = amount
            .trim()
            .parse()
            .map_err(|_| invalid("radius is not a number"))?;

        Ok(Self::new(latitude, longitude, radius, unit))
    }
}
