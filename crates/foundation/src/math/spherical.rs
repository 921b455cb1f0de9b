use std::f64::consts::PI;

use super::{Mat3, Vec3};

/// Angular offsets that align the lat/lon rotation convention with a
/// specific equirectangular texture's seam and pole placement.
///
/// The offsets are empirical per texture. The pair below was derived against
/// the country-outlines texture and does not generalize to other world
/// textures without re-deriving it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereCalibration {
    pub lon_offset_rad: f64,
    pub lat_offset_rad: f64,
}

impl SphereCalibration {
    /// Calibration for the country-outlines equirectangular texture.
    pub const fn country_outlines() -> Self {
        Self {
            lon_offset_rad: 1.5 * PI,
            lat_offset_rad: PI,
        }
    }
}

impl Default for SphereCalibration {
    fn default() -> Self {
        Self::country_outlines()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LatLonError {
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl std::fmt::Display for LatLonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatLonError::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} outside [-90, 90]")
            }
            LatLonError::LongitudeOutOfRange(lon) => {
                write!(f, "longitude {lon} outside [-180, 180]")
            }
        }
    }
}

impl std::error::Error for LatLonError {}

/// Place `(lat, lon)` on the surface of a sphere of radius `radius`.
///
/// The point is produced by rotating the reference point `(0, 0, radius)`
/// first about the X axis by `lat + lat_offset`, then about the Y axis by
/// `lon + lon_offset` — a direct evaluation of the longitude→latitude→radius
/// frame chain as two rotation matrices.
pub fn sphere_surface_point(
    lat_deg: f64,
    lon_deg: f64,
    radius: f64,
    calibration: SphereCalibration,
) -> Result<Vec3, LatLonError> {
    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(LatLonError::LatitudeOutOfRange(lat_deg));
    }
    if !(-180.0..=180.0).contains(&lon_deg) {
        return Err(LatLonError::LongitudeOutOfRange(lon_deg));
    }

    let lon_angle = lon_deg.to_radians() + calibration.lon_offset_rad;
    let lat_angle = lat_deg.to_radians() + calibration.lat_offset_rad;
    let rotation = Mat3::rotation_y(lon_angle).mul(Mat3::rotation_x(lat_angle));
    Ok(rotation.mul_vec3(Vec3::new(0.0, 0.0, radius)))
}

#[cfg(test)]
mod tests {
    use super::{LatLonError, SphereCalibration, sphere_surface_point};
    use crate::math::Vec3;

    fn place(lat_deg: f64, lon_deg: f64) -> Vec3 {
        sphere_surface_point(lat_deg, lon_deg, 1.0, SphereCalibration::country_outlines())
            .expect("valid lat/lon")
    }

    fn assert_vec3_close(a: Vec3, b: Vec3, eps: f64) {
        assert!((a - b).length() <= eps, "expected {a:?} ~= {b:?}");
    }

    #[test]
    fn equator_prime_meridian_is_pinned() {
        // Regression anchor for the country-outlines calibration pair.
        assert_vec3_close(place(0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn poles_land_on_the_vertical_axis() {
        assert_vec3_close(place(90.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 1e-12);
        assert_vec3_close(place(-90.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 1e-12);
    }

    #[test]
    fn east_and_west_are_mirrored_in_z() {
        assert_vec3_close(place(0.0, 90.0), Vec3::new(0.0, 0.0, -1.0), 1e-12);
        assert_vec3_close(place(0.0, -90.0), Vec3::new(0.0, 0.0, 1.0), 1e-12);
    }

    #[test]
    fn every_valid_input_lies_on_the_unit_sphere() {
        for lat_step in 0..=18 {
            for lon_step in 0..=36 {
                let lat = -90.0 + 10.0 * f64::from(lat_step);
                let lon = -180.0 + 10.0 * f64::from(lon_step);
                let p = place(lat, lon);
                assert!(
                    (p.length() - 1.0).abs() <= 1e-12,
                    "({lat}, {lon}) produced off-sphere point {p:?}"
                );
            }
        }
    }

    #[test]
    fn radius_scales_the_output() {
        let p = sphere_surface_point(30.0, 45.0, 2.0, SphereCalibration::default())
            .expect("valid lat/lon");
        assert!((p.length() - 2.0).abs() <= 1e-12);
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        let cal = SphereCalibration::default();
        assert_eq!(
            sphere_surface_point(90.5, 0.0, 1.0, cal),
            Err(LatLonError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            sphere_surface_point(0.0, -180.25, 1.0, cal),
            Err(LatLonError::LongitudeOutOfRange(-180.25))
        );
        assert!(sphere_surface_point(f64::NAN, 0.0, 1.0, cal).is_err());
    }
}
