//! Geocentric solar position and hour-angle solving.
//!
//! Low-precision solar model: Julian cycle → mean anomaly → equation of
//! center → ecliptic longitude → declination, evaluated once per solar day
//! at local mean solar noon. Accuracy envelope is one to two minutes for
//! event times, which the chosen calibration constants (daily motion
//! 0.98564736°/day, obliquity 23.43929111°) hold across modern dates.
//!
//! Sources: standard spherical astronomy formulas (Meeus, USNO sunrise
//! equation). Public domain.

use arka_time::J2000_JD;

use crate::error::NoEventKind;

/// Mean obliquity of the ecliptic in degrees at J2000.
const OBLIQUITY_DEG: f64 = 23.43929111;

/// Mean daily solar motion in degrees per day (360 / 365.2422).
const DAILY_MOTION_DEG: f64 = 0.98564736;

/// Mean solar anomaly at J2000.0 in degrees.
const MEAN_ANOMALY_J2000_DEG: f64 = 357.5291;

/// Argument of perihelion of the Earth in degrees.
const PERIHELION_DEG: f64 = 102.9373;

/// Transit correction amplitudes in days (equation-of-time terms).
const TRANSIT_ANOMALY_AMPLITUDE: f64 = 0.00534;
const TRANSIT_OBLIQUITY_AMPLITUDE: f64 = 0.00692;

/// Solar position quantities for one solar day at a fixed longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Mean solar anomaly in degrees, [0, 360).
    pub mean_anomaly_deg: f64,
    /// Apparent ecliptic longitude in degrees, [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Solar declination in degrees, [-90, 90].
    pub declination_deg: f64,
    /// Solar transit (local solar noon) as a Julian Date.
    pub transit_jd: f64,
}

/// Compute the Sun's position for the solar day selected by `jd`.
///
/// `jd` is the shifted midnight Julian Date from
/// [`arka_time::next_midnight_jd`]; the one-day advance built into it makes
/// the cycle floor below select the requested civil date for any longitude
/// in [−180, 180]. All quantities are evaluated at local mean solar noon.
pub fn solar_position(jd: f64, longitude_deg: f64) -> SolarPosition {
    let cycle = (jd - J2000_JD - longitude_deg / 360.0).floor();
    let mean_noon_jd = J2000_JD + cycle - longitude_deg / 360.0;

    let mean_anomaly_deg = (MEAN_ANOMALY_J2000_DEG
        + DAILY_MOTION_DEG * (mean_noon_jd - J2000_JD))
        .rem_euclid(360.0);
    let m = mean_anomaly_deg.to_radians();

    // Equation of center, third order in the mean anomaly.
    let center_deg = 1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();

    let ecliptic_longitude_deg =
        (mean_anomaly_deg + center_deg + PERIHELION_DEG + 180.0).rem_euclid(360.0);
    let lambda = ecliptic_longitude_deg.to_radians();

    let declination_deg = (lambda.sin() * OBLIQUITY_DEG.to_radians().sin())
        .asin()
        .to_degrees();

    let transit_jd = mean_noon_jd + TRANSIT_ANOMALY_AMPLITUDE * m.sin()
        - TRANSIT_OBLIQUITY_AMPLITUDE * (2.0 * lambda).sin();

    SolarPosition {
        mean_anomaly_deg,
        ecliptic_longitude_deg,
        declination_deg,
        transit_jd,
    }
}

/// Hour angle at which the Sun's center crosses `altitude_deg`.
///
/// `cos H0 = (sin alt − sin lat · sin δ) / (cos lat · cos δ)`
///
/// A magnitude above one means the Sun never crosses the altitude on this
/// solar day; the sign tells whether it stays below (polar night) or above
/// (polar day). Otherwise `H0` is in [0, 180] degrees. Detection is by the
/// magnitude check alone; a NaN input fails both comparisons and flows
/// through `acos` to the instant-conversion boundary, which rejects it.
pub fn hour_angle_deg(
    latitude_deg: f64,
    declination_deg: f64,
    altitude_deg: f64,
) -> Result<f64, NoEventKind> {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let cos_h0 =
        (altitude_deg.to_radians().sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if cos_h0 > 1.0 {
        return Err(NoEventKind::PolarNight);
    }
    if cos_h0 < -1.0 {
        return Err(NoEventKind::PolarDay);
    }
    Ok(cos_h0.acos().to_degrees())
}
