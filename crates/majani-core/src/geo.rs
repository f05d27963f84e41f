// Rust guideline compliant 2026-10-12

//! Great-circle distance between coordinates.

use crate::Coordinate;

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two coordinates in kilometers.
///
/// Symmetric in its arguments and zero for identical points.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVOLUTION_SQUARE: Coordinate = Coordinate::new(35.6892, 51.3890);
    const SADEGHIEH: Coordinate = Coordinate::new(35.7219, 51.3347);

    #[test]
    fn test_known_pair_matches_reference() {
        let d = distance_km(REVOLUTION_SQUARE, SADEGHIEH);
        assert!((d - 6.104).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_km(SADEGHIEH, SADEGHIEH), 0.0);
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6);
    }

    #[test]
    fn test_method_form_delegates() {
        assert_eq!(
            REVOLUTION_SQUARE.distance_to(&SADEGHIEH),
            distance_km(REVOLUTION_SQUARE, SADEGHIEH)
        );
    }
}
