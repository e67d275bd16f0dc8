//! Error and warning types for query preparation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use argonaut_frames::FrameError;

/// Reasons a query cannot be sent.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum QueryError {
    /// The longitude / right ascension field is empty or unreadable.
    UnparseableLongitude,
    /// The latitude / declination field is empty or unreadable.
    UnparseableLatitude,
    /// Latitude / declination outside [-90, 90] degrees.
    LatitudeOutOfRange(f64),
    /// Conversion to galactic coordinates produced a non-finite value.
    NonFinite,
    /// Postage-stamp setup failed.
    Frame(FrameError),
    /// Request body could not be encoded or decoded.
    Json(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparseableLongitude => write!(f, "could not read the longitude"),
            Self::UnparseableLatitude => write!(f, "could not read the latitude"),
            Self::LatitudeOutOfRange(v) => {
                write!(f, "latitude {v} is outside [-90, 90] degrees")
            }
            Self::NonFinite => write!(f, "coordinates have no galactic equivalent"),
            Self::Frame(e) => write!(f, "frame error: {e}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
        }
    }
}

impl Error for QueryError {}

impl From<FrameError> for QueryError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Non-fatal notes about accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWarning {
    /// Galactic mode, but a field was typed as hours-minutes-seconds.
    HourAngleInGalactic,
}

impl Display for QueryWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourAngleInGalactic => write!(
                f,
                "hh:mm:ss format detected. Did you mean to use Equatorial coordinates?"
            ),
        }
    }
}
