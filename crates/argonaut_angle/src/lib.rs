//! Angle helpers for the dust map query tools.
//!
//! This crate provides:
//! - degree ↔ radian conversion
//! - hour-minute-second and degree-minute-second conversion
//! - a tokenizing parser for user-typed angles (`12.5`, `10h5m3s`, `-15d43'15"`)
//! - labels for right ascension and longitude/latitude readouts

pub mod convert;
pub mod format;
pub mod parse;

pub use convert::{
    Hms, degrees_to_hms, degrees_to_radians, dms_to_degrees, hms_to_degrees, normalize_360,
    radians_to_degrees,
};
pub use format::{lonlat_label, ra_label};
pub use parse::{Angle, AngleFormat, ParsedAngle, parse_angle};
