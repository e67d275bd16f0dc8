//! Equatorial ↔ Galactic coordinate conversion.
//!
//! The galactic frame is described by the equatorial position of the north
//! galactic pole plus the rotation angle that places galactic longitude zero.
//! The rotation is derived from a reference direction (the galactic center)
//! instead of being quoted directly.

use std::sync::LazyLock;

use argonaut_angle::{degrees_to_radians, normalize_360, radians_to_degrees};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension of the north galactic pole, J2000 (degrees).
pub const J2000_POLE_RA_DEG: f64 = 192.85948;
/// Declination of the north galactic pole, J2000 (degrees).
pub const J2000_POLE_DEC_DEG: f64 = 27.12825;
/// Right ascension of the reference direction (galactic center), J2000 (degrees).
pub const J2000_REF_RA_DEG: f64 = 266.4051;
/// Declination of the reference direction (galactic center), J2000 (degrees).
pub const J2000_REF_DEC_DEG: f64 = -28.9362;

static J2000: LazyLock<FrameParams> = LazyLock::new(|| {
    FrameParams::from_pole(
        J2000_POLE_RA_DEG,
        J2000_POLE_DEC_DEG,
        J2000_REF_RA_DEG,
        J2000_REF_DEC_DEG,
    )
});

/// Parameters of an equatorial → galactic rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Right ascension of the galactic pole (radians).
    pub pole_ra_rad: f64,
    /// Cosine of the galactic pole declination.
    pub cos_pole_dec: f64,
    /// Sine of the galactic pole declination.
    pub sin_pole_dec: f64,
    /// Galactic longitude of the celestial pole (radians).
    pub reference_rotation_rad: f64,
}

impl FrameParams {
    /// Build a frame from its pole and a reference direction that lies at
    /// galactic longitude zero. All inputs in degrees.
    pub fn from_pole(
        pole_ra_deg: f64,
        pole_dec_deg: f64,
        ref_ra_deg: f64,
        ref_dec_deg: f64,
    ) -> Self {
        let pole_ra = degrees_to_radians(pole_ra_deg);
        let pole_dec = degrees_to_radians(pole_dec_deg);
        let ref_ra = degrees_to_radians(ref_ra_deg);
        let ref_dec = degrees_to_radians(ref_dec_deg);

        let cos_pole_dec = pole_dec.cos();
        let sin_pole_dec = pole_dec.sin();
        let reference_rotation_rad = (ref_dec.sin() * cos_pole_dec
            - ref_dec.cos() * sin_pole_dec * (pole_ra - ref_ra).cos())
        .acos();

        Self {
            pole_ra_rad: pole_ra,
            cos_pole_dec,
            sin_pole_dec,
            reference_rotation_rad,
        }
    }

    /// The J2000 frame, computed on first use.
    pub fn j2000() -> &'static FrameParams {
        &J2000
    }
}

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoord {
    /// Right ascension, range [0, 360) after conversion.
    pub ra_deg: f64,
    /// Declination, range [-90, 90].
    pub dec_deg: f64,
}

/// Galactic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticCoord {
    /// Longitude, range [0, 360) after conversion.
    pub l_deg: f64,
    /// Latitude, range [-90, 90].
    pub b_deg: f64,
}

/// Single-step wrap into [0, period). Input is assumed within one period of the range.
pub(crate) fn wrap_once(v: f64, period: f64) -> f64 {
    let w = if v >= period {
        v - period
    } else if v < 0.0 {
        v + period
    } else {
        v
    };
    if w >= period { 0.0 } else { w }
}

/// Convert equatorial `(ra, dec)` in degrees to galactic coordinates.
///
/// Undefined at the galactic poles, where `cos(b) = 0`: the result is
/// non-finite rather than an error.
pub fn equatorial_to_galactic(ra_deg: f64, dec_deg: f64, frame: &FrameParams) -> GalacticCoord {
    let d_ra = degrees_to_radians(ra_deg) - frame.pole_ra_rad;
    let dec = degrees_to_radians(dec_deg);

    let (sin_dec, cos_dec) = dec.sin_cos();
    let cos_d_ra = d_ra.cos();

    let b = (sin_dec * frame.sin_pole_dec + cos_dec * frame.cos_pole_dec * cos_d_ra).asin();
    let inv_cos_b = 1.0 / b.cos();

    let sin_dl = cos_dec * d_ra.sin() * inv_cos_b;
    let cos_dl =
        (sin_dec * frame.cos_pole_dec - cos_dec * frame.sin_pole_dec * cos_d_ra) * inv_cos_b;
    let l = frame.reference_rotation_rad - sin_dl.atan2(cos_dl);

    GalacticCoord {
        l_deg: wrap_once(radians_to_degrees(l), 360.0),
        b_deg: radians_to_degrees(b),
    }
}

/// Convert galactic `(l, b)` in degrees to equatorial coordinates.
///
/// Undefined at the celestial poles, where `cos(dec) = 0`.
pub fn galactic_to_equatorial(l_deg: f64, b_deg: f64, frame: &FrameParams) -> EquatorialCoord {
    let b = degrees_to_radians(b_deg);
    let d_l = frame.reference_rotation_rad - degrees_to_radians(l_deg);

    let (sin_b, cos_b) = b.sin_cos();
    let cos_d_l = d_l.cos();

    let dec = (frame.sin_pole_dec * sin_b + frame.cos_pole_dec * cos_b * cos_d_l).asin();
    let inv_cos_dec = 1.0 / dec.cos();

    let sin_da = cos_b * d_l.sin() * inv_cos_dec;
    let cos_da = (sin_b * frame.cos_pole_dec - cos_b * frame.sin_pole_dec * cos_d_l) * inv_cos_dec;
    let ra = sin_da.atan2(cos_da) + frame.pole_ra_rad;

    EquatorialCoord {
        ra_deg: wrap_once(radians_to_degrees(ra), 360.0),
        dec_deg: radians_to_degrees(dec),
    }
}

/// [`equatorial_to_galactic`] in the J2000 frame.
pub fn equatorial_to_galactic_j2000(ra_deg: f64, dec_deg: f64) -> GalacticCoord {
    equatorial_to_galactic(ra_deg, dec_deg, FrameParams::j2000())
}

/// [`galactic_to_equatorial`] in the J2000 frame.
pub fn galactic_to_equatorial_j2000(l_deg: f64, b_deg: f64) -> EquatorialCoord {
    galactic_to_equatorial(l_deg, b_deg, FrameParams::j2000())
}

/// Smallest separation between two longitudes in degrees, in [0, 180].
pub fn longitude_separation_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    d.min(360.0 - d)
}
