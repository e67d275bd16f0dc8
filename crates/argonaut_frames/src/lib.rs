//! Sky frame helpers for the dust map query tools.
//!
//! Provides the equatorial ↔ galactic rotation (J2000), the gnomonic
//! (tangent-plane) projection used for postage-stamp images, and the
//! pixel ↔ sky mapping of a stamp.

pub mod error;
pub mod galactic;
pub mod gnomonic;
pub mod stamp;

pub use error::FrameError;
pub use galactic::{
    EquatorialCoord, FrameParams, GalacticCoord, J2000_POLE_DEC_DEG, J2000_POLE_RA_DEG,
    J2000_REF_DEC_DEG, J2000_REF_RA_DEG, equatorial_to_galactic, equatorial_to_galactic_j2000,
    galactic_to_equatorial, galactic_to_equatorial_j2000, longitude_separation_deg,
};
pub use gnomonic::{
    PlanePoint, SkyPoint, TangentPoint, cos_center_distance, project_gnomonic,
    project_gnomonic_inverse,
};
pub use stamp::StampView;
