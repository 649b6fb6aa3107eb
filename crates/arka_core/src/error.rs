//! Error types for solar event computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a horizon-crossing event does not occur on a given solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoEventKind {
    /// The Sun stays below the altitude threshold all day.
    PolarNight,
    /// The Sun stays above the altitude threshold all day.
    PolarDay,
}

/// Errors from solar event computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// The requested event does not occur on this date (polar conditions).
    /// Expected and recoverable.
    NoEvent(NoEventKind),
    /// A Julian Day reached the instant conversion non-finite or outside
    /// the representable range. Indicates an internal invariant violation,
    /// never a polar condition.
    NonFiniteInstant { jd: f64 },
    /// Geographic coordinate rejected by a validating constructor.
    InvalidCoordinate(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEvent(NoEventKind::PolarNight) => {
                write!(f, "no event: sun stays below the altitude threshold (polar night)")
            }
            Self::NoEvent(NoEventKind::PolarDay) => {
                write!(f, "no event: sun stays above the altitude threshold (polar day)")
            }
            Self::NonFiniteInstant { jd } => write!(f, "non-finite julian day: {jd}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
        }
    }
}

impl Error for SolarError {}

impl From<NoEventKind> for SolarError {
    fn from(kind: NoEventKind) -> Self {
        Self::NoEvent(kind)
    }
}
