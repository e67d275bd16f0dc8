//! Error types for frame and stamp setup.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from frame or postage-stamp configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// Postage-stamp geometry failed validation.
    InvalidStamp(&'static str),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStamp(msg) => write!(f, "invalid postage stamp: {msg}"),
        }
    }
}

impl Error for FrameError {}
