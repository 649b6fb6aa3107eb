//! Event types and the serializable per-day event bundle.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Horizon-crossing solar events, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Astronomical dawn: Sun center rising through −18°.
    AstronomicalDawn,
    /// Nautical dawn: Sun center rising through −12°.
    NauticalDawn,
    /// Civil dawn: Sun center rising through −6°.
    CivilDawn,
    /// Sunrise: upper limb at the horizon, Sun center at −50′.
    Sunrise,
    /// Sunset: upper limb disappears below the horizon.
    Sunset,
    /// Civil dusk: Sun center setting through −6°.
    CivilDusk,
    /// Nautical dusk: Sun center setting through −12°.
    NauticalDusk,
    /// Astronomical dusk: Sun center setting through −18°.
    AstronomicalDusk,
}

impl SolarEvent {
    /// All eight crossing events in chronological order.
    pub const ALL: [SolarEvent; 8] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Altitude threshold in degrees for this crossing.
    ///
    /// Sunrise/sunset use −50′ (34′ refraction + 16′ semidiameter folded
    /// into one constant); twilight events use the standard depression
    /// angles.
    pub fn altitude_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => -(50.0 / 60.0),
            Self::CivilDawn | Self::CivilDusk => -6.0,
            Self::NauticalDawn | Self::NauticalDusk => -12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => -18.0,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }
}

/// All nine named instants of one solar day, in chronological order.
///
/// Crossing events that do not occur are `None` (serialized as `null`);
/// solar noon always occurs. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct SolarDay<Tz: TimeZone = Utc> {
    pub astronomical_dawn: Option<DateTime<Tz>>,
    pub nautical_dawn: Option<DateTime<Tz>>,
    pub civil_dawn: Option<DateTime<Tz>>,
    pub sunrise: Option<DateTime<Tz>>,
    pub solar_noon: DateTime<Tz>,
    pub sunset: Option<DateTime<Tz>>,
    pub civil_dusk: Option<DateTime<Tz>>,
    pub nautical_dusk: Option<DateTime<Tz>>,
    pub astronomical_dusk: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> SolarDay<Tz> {
    /// Project every instant into another timezone.
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> SolarDay<Tz2> {
        SolarDay {
            astronomical_dawn: self.astronomical_dawn.as_ref().map(|t| t.with_timezone(tz)),
            nautical_dawn: self.nautical_dawn.as_ref().map(|t| t.with_timezone(tz)),
            civil_dawn: self.civil_dawn.as_ref().map(|t| t.with_timezone(tz)),
            sunrise: self.sunrise.as_ref().map(|t| t.with_timezone(tz)),
            solar_noon: self.solar_noon.with_timezone(tz),
            sunset: self.sunset.as_ref().map(|t| t.with_timezone(tz)),
            civil_dusk: self.civil_dusk.as_ref().map(|t| t.with_timezone(tz)),
            nautical_dusk: self.nautical_dusk.as_ref().map(|t| t.with_timezone(tz)),
            astronomical_dusk: self.astronomical_dusk.as_ref().map(|t| t.with_timezone(tz)),
        }
    }
}
