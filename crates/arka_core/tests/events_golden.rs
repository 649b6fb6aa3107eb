//! Golden-value integration tests against published almanac times.
//!
//! Tolerances reflect the accuracy envelope of the low-precision solar
//! model: two minutes on individual event times, one minute on day length.

use arka_core::{NoEventKind, SolarEngine, SolarError};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn assert_within(actual: DateTime<Utc>, expected: DateTime<Utc>, tolerance_s: i64) {
    let diff = (actual - expected).num_seconds().abs();
    assert!(
        diff <= tolerance_s,
        "expected {expected} ± {tolerance_s}s, got {actual} ({diff}s off)"
    );
}

#[test]
fn paris_november() {
    // 48.87°N, 2.67°E on 2025-Nov-02; local civil time is UTC+1.
    let engine = SolarEngine::new(48.87, 2.67);
    let d = date(2025, 11, 2);

    assert_within(engine.sunrise(d).unwrap(), utc("2025-11-02T06:39:00Z"), 120);
    assert_within(engine.solar_noon(d).unwrap(), utc("2025-11-02T11:32:00Z"), 120);
    assert_within(engine.sunset(d).unwrap(), utc("2025-11-02T16:27:00Z"), 120);
}

#[test]
fn paris_november_local_projection() {
    let engine = SolarEngine::new(48.87, 2.67);
    let d = date(2025, 11, 2);
    let cet = FixedOffset::east_opt(3600).unwrap();

    let sunrise = engine.event_in(d, arka_core::SolarEvent::Sunrise, &cet).unwrap();
    assert_eq!(sunrise.date_naive(), d);
    // 07:39 local, give or take the model envelope.
    let minutes = i64::from(chrono::Timelike::hour(&sunrise)) * 60
        + i64::from(chrono::Timelike::minute(&sunrise));
    assert!(
        (minutes - (7 * 60 + 39)).abs() <= 2,
        "local sunrise at {sunrise}"
    );

    // Projection changes representation, not the instant.
    assert_eq!(sunrise, engine.sunrise(d).unwrap());
}

#[test]
fn london_november() {
    // 51.5°N, 0.13°W on 2025-Nov-05.
    let engine = SolarEngine::new(51.5, -0.13);
    let d = date(2025, 11, 5);

    assert_within(engine.sunrise(d).unwrap(), utc("2025-11-05T07:01:00Z"), 120);
    assert_within(engine.sunset(d).unwrap(), utc("2025-11-05T16:26:00Z"), 120);

    let length = engine.day_length(d);
    let expected = TimeDelta::hours(9) + TimeDelta::minutes(25);
    assert!(
        (length - expected).num_seconds().abs() <= 60,
        "day length = {length}"
    );
}

#[test]
fn polar_night_reports_no_event() {
    // 85°N around the December solstice: the Sun never clears the horizon.
    let engine = SolarEngine::new(85.0, 0.0);
    let d = date(2025, 12, 21);

    assert_eq!(
        engine.sunrise(d),
        Err(SolarError::NoEvent(NoEventKind::PolarNight))
    );
    assert_eq!(
        engine.sunset(d),
        Err(SolarError::NoEvent(NoEventKind::PolarNight))
    );
    assert_eq!(engine.sunrise_or_none(d), None);
    assert_eq!(engine.day_length(d), TimeDelta::zero());
}

#[test]
fn polar_day_reports_no_event() {
    // Same latitude at the June solstice: midnight sun.
    let engine = SolarEngine::new(85.0, 0.0);
    let d = date(2025, 6, 21);

    assert_eq!(
        engine.sunrise(d),
        Err(SolarError::NoEvent(NoEventKind::PolarDay))
    );
    assert_eq!(engine.day_length(d), TimeDelta::zero());
}

#[test]
fn polar_night_still_has_a_solar_noon() {
    let engine = SolarEngine::new(85.0, 0.0);
    let d = date(2025, 12, 21);
    let day = engine.day_events(d).unwrap();

    // The Sun tops out near −18.4° at 85°N midwinter, so every crossing
    // is absent, astronomical twilight included. Noon still exists.
    assert_eq!(day.sunrise, None);
    assert_eq!(day.sunset, None);
    assert_eq!(day.civil_dawn, None);
    assert_eq!(day.nautical_dawn, None);
    assert_eq!(day.astronomical_dawn, None);
    assert_eq!(day.astronomical_dusk, None);
    assert_eq!(day.solar_noon.date_naive(), d);
}

#[test]
fn equator_equinox_near_twelve_hours() {
    let engine = SolarEngine::new(0.0, 0.0);
    let length = engine.day_length(date(2025, 3, 20));
    let twelve = TimeDelta::hours(12);
    assert!(
        (length - twelve).num_seconds().abs() <= 30 * 60,
        "equinox day length = {length}"
    );
}
