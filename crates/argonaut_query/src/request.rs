//! Text-field validation and the galactic request body.

use argonaut_angle::{AngleFormat, ParsedAngle, parse_angle};
use argonaut_frames::{GalacticCoord, StampView, equatorial_to_galactic_j2000};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryWarning};

/// Coordinate system the two input fields are typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordSystem {
    /// Galactic longitude `l` and latitude `b`.
    Galactic,
    /// J2000 right ascension and declination.
    Equatorial,
}

impl CoordSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Galactic => "galactic",
            Self::Equatorial => "equatorial",
        }
    }

    /// Symbols of the (longitude, latitude) fields.
    pub const fn symbols(self) -> (&'static str, &'static str) {
        match self {
            Self::Galactic => ("\u{2113}", "b"),
            Self::Equatorial => ("\u{03B1}", "\u{03B4}"),
        }
    }
}

/// Body of a line-of-sight query: galactic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub l: f64,
    pub b: f64,
}

impl QueryRequest {
    pub fn galactic(&self) -> GalacticCoord {
        GalacticCoord {
            l_deg: self.l,
            b_deg: self.b,
        }
    }

    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A validated query plus what it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub request: QueryRequest,
    pub system: CoordSystem,
    /// Input longitude in `system` (degrees).
    pub input_lon_deg: f64,
    /// Input latitude in `system` (degrees).
    pub input_lat_deg: f64,
    /// Notation of each typed field; `None` for stamp clicks.
    pub formats: Option<(AngleFormat, AngleFormat)>,
    pub warning: Option<QueryWarning>,
}

impl PreparedQuery {
    /// Input values as written back into the form fields, three decimals.
    pub fn input_echo(&self) -> (String, String) {
        (
            format!("{:.3}", self.input_lon_deg),
            format!("{:.3}", self.input_lat_deg),
        )
    }
}

/// Validate the two typed fields and build the galactic query.
///
/// The longitude field accepts hour angles, the latitude field does not.
pub fn prepare_query(
    lon_text: &str,
    lat_text: &str,
    system: CoordSystem,
) -> Result<PreparedQuery, QueryError> {
    let ParsedAngle::Valid(lon) = parse_angle(lon_text, true) else {
        return Err(QueryError::UnparseableLongitude);
    };
    let ParsedAngle::Valid(lat) = parse_angle(lat_text, false) else {
        return Err(QueryError::UnparseableLatitude);
    };
    if !(-90.0..=90.0).contains(&lat.degrees) {
        return Err(QueryError::LatitudeOutOfRange(lat.degrees));
    }

    let hour_angle_typed = lon.format == AngleFormat::HourMinuteSecond
        || lat.format == AngleFormat::HourMinuteSecond;
    let warning = (system == CoordSystem::Galactic && hour_angle_typed)
        .then_some(QueryWarning::HourAngleInGalactic);
    if let Some(w) = warning {
        log::warn!("{w}");
    }

    let galactic = to_galactic(lon.degrees, lat.degrees, system)?;

    Ok(PreparedQuery {
        request: QueryRequest {
            l: galactic.l_deg,
            b: galactic.b_deg,
        },
        system,
        input_lon_deg: lon.degrees,
        input_lat_deg: lat.degrees,
        formats: Some((lon.format, lat.format)),
        warning,
    })
}

/// Build the query for a click on a postage stamp.
///
/// The request is the galactic position under the cursor; the echoed input
/// is expressed in `system` so the form fields can be refreshed.
pub fn prepare_stamp_query(
    view: &StampView,
    px: f64,
    py: f64,
    system: CoordSystem,
) -> Result<PreparedQuery, QueryError> {
    let galactic = view.pixel_to_galactic(px, py);
    let (input_lon_deg, input_lat_deg) = match system {
        CoordSystem::Galactic => (galactic.l_deg, galactic.b_deg),
        CoordSystem::Equatorial => {
            let e = view.pixel_to_equatorial(px, py);
            (e.ra_deg, e.dec_deg)
        }
    };
    log::debug!(
        "stamp click ({px:.1}, {py:.1}) -> (l,b) = ({}, {})",
        galactic.l_deg,
        galactic.b_deg
    );
    check_finite(&galactic)?;

    Ok(PreparedQuery {
        request: QueryRequest {
            l: galactic.l_deg,
            b: galactic.b_deg,
        },
        system,
        input_lon_deg,
        input_lat_deg,
        formats: None,
        warning: None,
    })
}

fn to_galactic(
    lon_deg: f64,
    lat_deg: f64,
    system: CoordSystem,
) -> Result<GalacticCoord, QueryError> {
    let galactic = match system {
        CoordSystem::Galactic => GalacticCoord {
            l_deg: lon_deg,
            b_deg: lat_deg,
        },
        CoordSystem::Equatorial => {
            let g = equatorial_to_galactic_j2000(lon_deg, lat_deg);
            log::debug!("(l,b) = ({}, {})", g.l_deg, g.b_deg);
            g
        }
    };
    check_finite(&galactic)?;
    Ok(galactic)
}

fn check_finite(g: &GalacticCoord) -> Result<(), QueryError> {
    if g.l_deg.is_finite() && g.b_deg.is_finite() {
        Ok(())
    } else {
        Err(QueryError::NonFinite)
    }
}
