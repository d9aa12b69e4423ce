//! Distance and curvature calculations.
//!
//! Uses the Haversine formula on a spherical Earth. Points are `geo::Point`
//! with x = longitude and y = latitude, both in degrees.

#[allow(deprecated)]
use geo::{HaversineDistance, Point};

/// Fixed Earth radius used for every distance: 6371 km.
pub const EARTH_RADIUS_M: f64 = 6_371.0 * 1_000.0;

/// Radius `geo` measures with (IUGG mean radius).
const GEO_MEAN_RADIUS_M: f64 = 6_371_008.8;

/// Calculate Haversine distance between two points in meters
#[allow(deprecated)]
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    // Same central angle, rescaled to the fixed radius
    p1.haversine_distance(&p2) / GEO_MEAN_RADIUS_M * EARTH_RADIUS_M
}

/// Ratio between the road length of a route and its great-circle length.
///
/// A zero (or non-finite) geographic length has no meaningful ratio; the
/// curvature is then defined as `1.0`, i.e. "the road is as straight as the
/// geometry allows".
pub fn curvature(road_distance: i64, geo_distance: f64) -> f64 {
    if geo_distance == 0.0 || !geo_distance.is_finite() {
        return 1.0;
    }
    road_distance as f64 / geo_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_distance() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = haversine_distance(nyc, la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_uses_fixed_radius() {
        // Independent evaluation of the formula on a 6371 km sphere
        let (tula, moscow): (Point<f64>, Point<f64>) = (Point::new(37.6, 54.2), Point::new(37.6, 55.8));
        let (lat1, lat2) = (tula.y().to_radians(), moscow.y().to_radians());
        let h = ((lat2 - lat1) / 2.0).sin().powi(2);
        let expected = 2.0 * h.sqrt().asin() * 6_371_000.0;
        assert_relative_eq!(haversine_distance(tula, moscow), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_meridian_distance() {
        // Along a meridian the distance is just the latitude arc
        let tula = Point::new(37.6, 54.2);
        let moscow = Point::new(37.6, 55.7);
        let expected = 1.5_f64.to_radians() * EARTH_RADIUS_M;
        assert_relative_eq!(haversine_distance(tula, moscow), expected, max_relative = 1e-12);
        assert_relative_eq!(haversine_distance(moscow, tula), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Point::new(37.6, 55.7);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let d = haversine_distance(Point::new(0.0, 0.0), Point::new(180.0, 0.0));
        assert!(d.is_finite());
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_M, max_relative = 1e-12);
    }

    #[test]
    fn test_curvature() {
        assert_relative_eq!(curvature(200, 100.0), 2.0);
        assert_relative_eq!(curvature(0, 50.0), 0.0);
        assert_eq!(curvature(200, 0.0), 1.0);
        assert_eq!(curvature(0, 0.0), 1.0);
        assert_eq!(curvature(10, f64::NAN), 1.0);
    }
}
