//! Julian Day ↔ calendar and epoch-second conversions.
//!
//! Sources:
//! - Calendar → JD: Meeus, Astronomical Algorithms, ch. 7 (Gregorian form).
//! - Epoch anchors: standard astronomical constants. Public domain.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UT).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a proleptic-Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction (e.g. `1.5` is the
/// first of the month at 12:00 UT). Values past the end of the month roll
/// over correctly because the closed form is linear in the day, so callers
/// may pass e.g. day 32 of January for February 1.
///
/// Works for any date representable in `i32` years; no error conditions.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };
    // Gregorian century correction.
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date of 00:00 UT on the day *after* the given civil date.
///
/// This is the day selector for the solar event solver: the one-day
/// advance guarantees that flooring `jd − J2000_JD − longitude/360` lands
/// on the given date's solar cycle for every longitude in [−180, 180].
pub fn next_midnight_jd(year: i32, month: u32, day: u32) -> f64 {
    calendar_to_jd(year, month, f64::from(day) + 1.0)
}

/// Seconds between a Julian Date and the Unix epoch.
///
/// Carried entirely in `f64`; callers truncate to their native time
/// representation only after this multiplication.
pub fn jd_to_unix_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}
