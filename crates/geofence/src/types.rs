//! Value types shared by every predicate.
//!
//! - `Coordinate`: a GPS fix in degrees. Unchecked by construction so that
//!   out-of-range input can still be represented and rejected.
//! - `Polygon`: ordered vertex ring; the closing edge is implicit.
//! - `GeoFence`: polygon plus the active flag, in the stored camelCase form.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub(crate) const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

/// Rejected coordinate component.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude must be between -90 and 90 degrees, got {0}")]
    Latitude(f64),
    #[error("longitude must be between -180 and 180 degrees, got {0}")]
    Longitude(f64),
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checked constructor; NaN fails like any other out-of-range value.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(*self)
    }

    /// Great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_to(&self, other: Coordinate) -> f64 {
        crate::distance::calculate_distance(*self, other)
    }

    /// Planar view used by ray casting: `x = latitude`, `y = longitude`.
    #[inline]
    pub(crate) fn as_xy(&self) -> Vector2<f64> {
        Vector2::new(self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Ordered vertex ring. Order matters; fewer than three vertices encloses nothing.
pub type Polygon = Vec<Coordinate>;

/// Polygonal fence attached to a surveyor's assigned location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFence {
    pub is_active: bool,
    #[serde(default)]
    pub coordinates: Polygon,
}

impl GeoFence {
    pub fn new(is_active: bool, coordinates: Polygon) -> Self {
        Self {
            is_active,
            coordinates,
        }
    }

    /// A fence that imposes no constraint.
    pub fn inactive() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, current: Coordinate) -> bool {
        crate::fence::is_within_geo_fence(current, self)
    }

    /// Vertex mean, if the fence has any vertices.
    pub fn centroid(&self) -> Option<Coordinate> {
        crate::polygon::polygon_centroid(&self.coordinates)
    }
}

/// True iff latitude is in [-90, 90] and longitude in [-180, 180].
#[inline]
pub fn is_valid_coordinate(coord: Coordinate) -> bool {
    LATITUDE_RANGE.contains(&coord.latitude) && LONGITUDE_RANGE.contains(&coord.longitude)
}
