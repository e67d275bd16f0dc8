//! Gnomonic (tangent-plane) projection.
//!
//! Points on the unit sphere are projected from the sphere's center onto the
//! plane touching it at the tangent point. Great circles become straight
//! lines. Angles are in radians throughout this module.

use std::f64::consts::TAU;

use crate::galactic::wrap_once;

/// Projection center, with its latitude pre-split into cosine and sine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPoint {
    pub lon0_rad: f64,
    pub cos_lat0: f64,
    pub sin_lat0: f64,
}

impl TangentPoint {
    pub fn new(lon0_rad: f64, lat0_rad: f64) -> Self {
        let (sin_lat0, cos_lat0) = lat0_rad.sin_cos();
        Self {
            lon0_rad,
            cos_lat0,
            sin_lat0,
        }
    }

    pub fn from_degrees(lon0_deg: f64, lat0_deg: f64) -> Self {
        Self::new(lon0_deg.to_radians(), lat0_deg.to_radians())
    }

    /// Latitude of the tangent point (radians).
    pub fn lat0_rad(&self) -> f64 {
        self.sin_lat0.atan2(self.cos_lat0)
    }
}

/// Point on the projection plane, in units of the sphere radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

/// Point on the sphere (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPoint {
    /// Longitude, range [0, 2π) after inverse projection.
    pub lon_rad: f64,
    /// Latitude, range [-π/2, π/2].
    pub lat_rad: f64,
}

impl SkyPoint {
    pub fn lon_deg(&self) -> f64 {
        self.lon_rad.to_degrees()
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_rad.to_degrees()
    }
}

/// Project `(lon, lat)` onto the plane tangent at `center`.
///
/// Points 90° or more from the center have no image; at exactly 90° the
/// result is infinite, beyond it the point lands mirrored through the
/// origin. Callers that care must check [`cos_center_distance`] first.
pub fn project_gnomonic(lon_rad: f64, lat_rad: f64, center: &TangentPoint) -> PlanePoint {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_dlon, cos_dlon) = (lon_rad - center.lon0_rad).sin_cos();

    let a = 1.0 / cos_center_distance(lon_rad, lat_rad, center);

    PlanePoint {
        x: a * cos_lat * sin_dlon,
        y: a * (center.cos_lat0 * sin_lat - center.sin_lat0 * cos_lat * cos_dlon),
    }
}

/// Cosine of the angular distance between `(lon, lat)` and the tangent point.
pub fn cos_center_distance(lon_rad: f64, lat_rad: f64, center: &TangentPoint) -> f64 {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    center.sin_lat0 * sin_lat + center.cos_lat0 * cos_lat * (lon_rad - center.lon0_rad).cos()
}

/// Map a plane point back onto the sphere.
///
/// The plane origin returns the tangent point itself.
pub fn project_gnomonic_inverse(x: f64, y: f64, center: &TangentPoint) -> SkyPoint {
    let rho = x.hypot(y);
    if rho == 0.0 {
        return SkyPoint {
            lon_rad: wrap_once(center.lon0_rad, TAU),
            lat_rad: center.lat0_rad(),
        };
    }

    let c = rho.atan();
    let (sin_c, cos_c) = c.sin_cos();

    let lat = (cos_c * center.sin_lat0 + y * sin_c * center.cos_lat0 / rho).asin();
    let lon = center.lon0_rad
        + (x * sin_c).atan2(rho * center.cos_lat0 * cos_c - y * center.sin_lat0 * sin_c);

    SkyPoint {
        lon_rad: wrap_once(lon, TAU),
        lat_rad: lat,
    }
}
