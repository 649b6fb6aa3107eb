//! Engine-level integration tests: event ordering, bundle consistency,
//! and the dual failing/non-failing accessor contract.

use arka_core::{SolarEngine, SolarEvent};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mid_latitude_events_nest_around_noon() {
    let engine = SolarEngine::new(48.87, 2.67);
    let d = date(2025, 11, 2);
    let day = engine.day_events(d).unwrap();

    let astronomical_dawn = day.astronomical_dawn.unwrap();
    let nautical_dawn = day.nautical_dawn.unwrap();
    let civil_dawn = day.civil_dawn.unwrap();
    let sunrise = day.sunrise.unwrap();
    let sunset = day.sunset.unwrap();
    let civil_dusk = day.civil_dusk.unwrap();
    let nautical_dusk = day.nautical_dusk.unwrap();
    let astronomical_dusk = day.astronomical_dusk.unwrap();

    assert!(astronomical_dawn < nautical_dawn);
    assert!(nautical_dawn < civil_dawn);
    assert!(civil_dawn < sunrise);
    assert!(sunrise < day.solar_noon);
    assert!(day.solar_noon < sunset);
    assert!(sunset < civil_dusk);
    assert!(civil_dusk < nautical_dusk);
    assert!(nautical_dusk < astronomical_dusk);
}

#[test]
fn bundle_matches_individual_accessors() {
    let engine = SolarEngine::new(51.5, -0.13);
    let d = date(2025, 11, 5);
    let day = engine.day_events(d).unwrap();

    assert_eq!(day.sunrise, engine.sunrise_or_none(d));
    assert_eq!(day.sunset, engine.sunset_or_none(d));
    assert_eq!(day.civil_dawn, engine.civil_dawn_or_none(d));
    assert_eq!(day.civil_dusk, engine.civil_dusk_or_none(d));
    assert_eq!(day.nautical_dawn, engine.nautical_dawn_or_none(d));
    assert_eq!(day.nautical_dusk, engine.nautical_dusk_or_none(d));
    assert_eq!(day.astronomical_dawn, engine.astronomical_dawn_or_none(d));
    assert_eq!(day.astronomical_dusk, engine.astronomical_dusk_or_none(d));
    assert_eq!(day.solar_noon, engine.solar_noon(d).unwrap());
}

#[test]
fn day_length_equals_sunset_minus_sunrise() {
    let engine = SolarEngine::new(48.87, 2.67);
    for d in [date(2025, 3, 20), date(2025, 6, 21), date(2025, 11, 2)] {
        let length = engine.day_length(d);
        let expected = engine.sunset(d).unwrap() - engine.sunrise(d).unwrap();
        assert_eq!(length, expected, "on {d}");
        assert!(length > chrono::TimeDelta::zero(), "on {d}");
    }
}

#[test]
fn named_accessors_match_event_enum() {
    let engine = SolarEngine::new(35.0, 139.7);
    let d = date(2025, 8, 6);

    assert_eq!(engine.sunrise(d), engine.event(d, SolarEvent::Sunrise));
    assert_eq!(engine.sunset(d), engine.event(d, SolarEvent::Sunset));
    assert_eq!(engine.civil_dawn(d), engine.event(d, SolarEvent::CivilDawn));
    assert_eq!(engine.civil_dusk(d), engine.event(d, SolarEvent::CivilDusk));
    assert_eq!(
        engine.nautical_dawn(d),
        engine.event(d, SolarEvent::NauticalDawn)
    );
    assert_eq!(
        engine.nautical_dusk(d),
        engine.event(d, SolarEvent::NauticalDusk)
    );
    assert_eq!(
        engine.astronomical_dawn(d),
        engine.event(d, SolarEvent::AstronomicalDawn)
    );
    assert_eq!(
        engine.astronomical_dusk(d),
        engine.event(d, SolarEvent::AstronomicalDusk)
    );
}

#[test]
fn serialized_bundle_has_all_nine_keys() {
    let engine = SolarEngine::new(48.87, 2.67);
    let day = engine.day_events(date(2025, 11, 2)).unwrap();
    let json = serde_json::to_value(&day).unwrap();
    let map = json.as_object().unwrap();

    assert_eq!(map.len(), 9);
    for key in [
        "astronomical_dawn",
        "nautical_dawn",
        "civil_dawn",
        "sunrise",
        "solar_noon",
        "sunset",
        "civil_dusk",
        "nautical_dusk",
        "astronomical_dusk",
    ] {
        assert!(map.contains_key(key), "missing {key}");
        assert!(!map[key].is_null(), "{key} unexpectedly absent");
    }
}

#[test]
fn timezone_projection_preserves_instants() {
    let engine = SolarEngine::new(48.87, 2.67);
    let d = date(2025, 11, 2);
    let cet = chrono::FixedOffset::east_opt(3600).unwrap();

    let utc_day = engine.day_events(d).unwrap();
    let local_day = engine.day_events_in(d, &cet).unwrap();
    assert_eq!(local_day.sunrise.unwrap(), utc_day.sunrise.unwrap());
    assert_eq!(local_day.solar_noon, utc_day.solar_noon);
    assert_eq!(
        engine.solar_noon_in(d, &cet).unwrap(),
        engine.solar_noon(d).unwrap()
    );
}
