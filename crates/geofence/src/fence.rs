//! Geo-fence policy on top of polygon containment.

use crate::polygon::is_point_in_polygon;
use crate::types::{Coordinate, GeoFence};

/// Whether `current` satisfies `fence`.
///
/// An inactive fence imposes no constraint and always passes; flipping
/// `is_active` is the enforcement switch, so callers must not skip this call.
/// `current` is not range checked here.
pub fn is_within_geo_fence(current: Coordinate, fence: &GeoFence) -> bool {
    if !fence.is_active {
        return true;
    }
    is_point_in_polygon(current, &fence.coordinates)
}
