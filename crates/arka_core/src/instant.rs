//! Julian Day → absolute instant conversion.
//!
//! This is the single checked numeric boundary of the crate: any NaN or
//! infinity produced by the private numeric core is converted to
//! [`SolarError::NonFiniteInstant`] here and never crosses the public API
//! as a timestamp.

use chrono::{DateTime, Utc};

use crate::error::SolarError;

/// Convert a Julian Date to a UTC instant.
///
/// The epoch-second offset `(jd − 2440587.5) × 86400` is carried in full
/// double precision and only then split into whole seconds and
/// nanoseconds for the host time representation.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, SolarError> {
    if !jd.is_finite() {
        return Err(SolarError::NonFiniteInstant { jd });
    }
    let seconds = arka_time::jd_to_unix_seconds(jd);
    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos = 0.0;
    }
    DateTime::from_timestamp(whole as i64, nanos as u32)
        .ok_or(SolarError::NonFiniteInstant { jd })
}
