use nalgebra::Vector3;

use crate::error::{ResampleError, Result};

/// A surface position as a unit 3-vector on the Earth sphere.
///
/// Filtering happens in this coordinate system because it has no
/// discontinuity at longitude ±180° and no singularities at the poles.
/// Averaging unit vectors and renormalizing the sum recovers the
/// spherical centroid, so a moving sum of n-vectors behaves like an
/// ordinary linear filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NVector(Vector3<f64>);

impl NVector {
    /// Build the unit vector for a latitude/longitude pair in degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        Self(Vector3::new(
            lat.cos() * lon.cos(),
            lat.cos() * lon.sin(),
            lat.sin(),
        ))
    }

    /// Renormalize an accumulated (non-unit) vector back onto the sphere.
    ///
    /// The accumulator stays a plain component-wise sum while filtering;
    /// only emission renormalizes. Fails on a zero-norm input rather
    /// than emitting NaN coordinates.
    pub fn from_vector(v: Vector3<f64>) -> Result<Self> {
        let norm = v.norm();
        if !(norm > 0.0) || !norm.is_finite() {
            return Err(ResampleError::DegenerateAccumulator);
        }
        Ok(Self(v / norm))
    }

    /// Latitude in degrees, in [-90, 90].
    pub fn latitude(&self) -> f64 {
        self.0.z.atan2(self.0.x.hypot(self.0.y)).to_degrees()
    }

    /// Longitude in degrees, in (-180, 180].
    pub fn longitude(&self) -> f64 {
        self.0.y.atan2(self.0.x).to_degrees()
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64, what: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {}", what, a, b);
    }

    #[test]
    fn test_degree_round_trip() {
        for &(lat, lon) in &[
            (0.0, 0.0),
            (37.0, -122.0),
            (-45.5, 170.25),
            (89.0, -1.0),
            (-89.0, 179.0),
        ] {
            let n = NVector::from_degrees(lat, lon);
            assert_close(n.latitude(), lat, 1e-9, "latitude");
            assert_close(n.longitude(), lon, 1e-9, "longitude");
            assert_close(n.as_vector().norm(), 1.0, 1e-12, "norm");
        }
    }

    #[test]
    fn test_antimeridian_longitude_range() {
        let n = NVector::from_degrees(10.0, 180.0);
        // atan2 keeps longitude in (-180, 180]; 180 maps to +180.
        assert_close(n.longitude().abs(), 180.0, 1e-9, "longitude");
        assert!(n.longitude() > -180.0 && n.longitude() <= 180.0);
    }

    #[test]
    fn test_poles() {
        let north = NVector::from_degrees(90.0, 42.0);
        assert_close(north.latitude(), 90.0, 1e-9, "north latitude");
        let south = NVector::from_degrees(-90.0, -10.0);
        assert_close(south.latitude(), -90.0, 1e-9, "south latitude");
    }

    #[test]
    fn test_accumulated_mean_recovers_midpoint() {
        let a = NVector::from_degrees(0.0, 0.0);
        let b = NVector::from_degrees(0.0, 90.0);
        let mean = NVector::from_vector(a.as_vector() + b.as_vector()).unwrap();
        assert_close(mean.latitude(), 0.0, 1e-9, "latitude");
        assert_close(mean.longitude(), 45.0, 1e-9, "longitude");
    }

    #[test]
    fn test_zero_vector_rejected() {
        let result = NVector::from_vector(Vector3::zeros());
        assert!(
            matches!(result, Err(ResampleError::DegenerateAccumulator)),
            "zero vector must not yield coordinates"
        );
    }
}
