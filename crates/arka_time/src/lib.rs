//! Julian Day and calendar conversions.
//!
//! This crate provides:
//! - Proleptic-Gregorian calendar → Julian Day conversion (Meeus/USNO form)
//! - The shifted day selector used by the solar event solver
//! - Julian Day → Unix epoch-second conversion
//!
//! All functions are pure `f64` computations with no I/O and no error
//! conditions; downstream crates own the checked boundaries.

pub mod julian;

pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_unix_seconds,
    next_midnight_jd,
};
