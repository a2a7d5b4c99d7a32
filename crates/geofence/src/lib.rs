//! Geo-fence and distance evaluation for surveyor attendance.
//!
//! Pure, stateless predicates over GPS coordinates:
//! - range validation of a fix,
//! - point-in-polygon containment (even-odd ray casting),
//! - great-circle distance (Haversine, kilometres),
//! - geo-fence checks that honour the fence's active flag.
//!
//! API Policy
//! - Free functions mirror the operations attendance handlers call; the value
//!   types carry method forms for convenience.
//! - Nothing here performs I/O or logs. Callers own transport and storage.

pub mod distance;
pub mod fence;
pub mod polygon;
pub mod types;
pub mod verdict;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use distance::{calculate_distance, EARTH_RADIUS_KM};
pub use fence::is_within_geo_fence;
pub use polygon::{is_point_in_polygon, polygon_centroid};
pub use types::{is_valid_coordinate, Coordinate, CoordinateError, GeoFence, Polygon};
pub use verdict::{evaluate_fix, Verdict};

/// Common exports for attendance handlers.
pub mod prelude {
    pub use crate::{
        calculate_distance, evaluate_fix, is_point_in_polygon, is_valid_coordinate,
        is_within_geo_fence, Coordinate, GeoFence, Polygon, Verdict,
    };
}
