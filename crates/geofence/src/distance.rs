//! Great-circle distance on a spherical Earth.

use crate::types::Coordinate;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Haversine distance between `a` and `b` in kilometres.
///
/// Pre: both coordinates are valid (see `is_valid_coordinate`).
/// Post: finite, non-negative, symmetric; zero for identical points and
/// half the circumference for antipodal points.
pub fn calculate_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = to_radians(b.latitude - a.latitude);
    let d_lon = to_radians(b.longitude - a.longitude);
    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat
        + to_radians(a.latitude).cos() * to_radians(b.latitude).cos() * sin_lon * sin_lon;
    // rounding can push h just outside [0, 1] near antipodes
    let h = h.clamp(0.0, 1.0);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_radians_matches_std() {
        for deg in [-180.0, -90.0, -1.5, 0.0, 45.0, 180.0] {
            assert!((to_radians(deg) - f64::to_radians(deg)).abs() < 1e-15);
        }
    }

    #[test]
    fn identical_points_are_zero() {
        let a = Coordinate::new(28.6139, 77.2090);
        assert!(calculate_distance(a, a).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_at_equator() {
        let d = calculate_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodes_are_finite() {
        let d = calculate_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - 20015.1).abs() < 0.1, "got {d}");

        let poles = calculate_distance(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0));
        assert!((poles - 20015.1).abs() < 0.1, "got {poles}");
    }

    #[test]
    fn known_city_pair() {
        // Delhi -> Mumbai, roughly 1150 km great-circle
        let delhi = Coordinate::new(28.6139, 77.2090);
        let mumbai = Coordinate::new(19.0760, 72.8777);
        let d = calculate_distance(delhi, mumbai);
        assert!((1140.0..1160.0).contains(&d), "got {d}");
        assert!((d - calculate_distance(mumbai, delhi)).abs() < 1e-9);
    }
}
