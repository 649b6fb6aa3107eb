//! Solar event times for a fixed Earth coordinate.
//!
//! This crate provides [`SolarEngine`], which computes sunrise, sunset,
//! solar noon, and civil/nautical/astronomical twilight boundaries from a
//! simplified geocentric solar model: Julian cycle → mean anomaly →
//! equation of center → ecliptic longitude → declination → hour angle.
//!
//! The engine is stateless beyond its immutable coordinate; every
//! operation is a deterministic pure computation, safe to call from many
//! threads without synchronization.
//!
//! ```rust
//! use arka_core::SolarEngine;
//! use chrono::NaiveDate;
//!
//! let paris = SolarEngine::new(48.87, 2.67);
//! let date = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
//! let sunrise = paris.sunrise(date).unwrap();
//! println!("sunrise: {sunrise}");
//! ```

pub mod error;
pub mod event_types;
pub mod instant;
pub mod position;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};

use arka_time::next_midnight_jd;

pub use error::{NoEventKind, SolarError};
pub use event_types::{SolarDay, SolarEvent};
pub use position::{SolarPosition, hour_angle_deg, solar_position};

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive. Expected range: [−90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Expected range: [−180, 180].
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// New coordinate. Performs no range validation; out-of-range values
    /// produce degenerate but non-panicking results. See [`Self::validated`].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// New coordinate, rejecting non-finite or out-of-range values.
    pub fn validated(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidCoordinate(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidCoordinate(
                "longitude must be finite and within [-180, 180]",
            ));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }
}

/// Solar event engine for a fixed coordinate.
///
/// Scalar and paired construction are interchangeable:
/// `SolarEngine::new(lat, lon)` and
/// `SolarEngine::at(GeoCoordinate::new(lat, lon))` produce identical
/// results for every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEngine {
    coordinate: GeoCoordinate,
}

impl SolarEngine {
    /// Engine from separate latitude/longitude scalars (degrees).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::at(GeoCoordinate::new(latitude_deg, longitude_deg))
    }

    /// Engine from a paired coordinate.
    pub fn at(coordinate: GeoCoordinate) -> Self {
        Self { coordinate }
    }

    /// Engine from validated scalars; fails fast on degenerate input.
    pub fn validated(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        Ok(Self::at(GeoCoordinate::validated(
            latitude_deg,
            longitude_deg,
        )?))
    }

    /// The coordinate this engine was built with.
    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Solar position for the given civil date.
    fn position_for(&self, date: NaiveDate) -> SolarPosition {
        let jd = next_midnight_jd(date.year(), date.month(), date.day());
        solar_position(jd, self.coordinate.longitude_deg)
    }

    /// Julian Date of a crossing event: the single solve every event
    /// accessor wraps.
    fn event_jd(&self, date: NaiveDate, event: SolarEvent) -> Result<f64, SolarError> {
        let pos = self.position_for(date);
        let h0 = hour_angle_deg(
            self.coordinate.latitude_deg,
            pos.declination_deg,
            event.altitude_deg(),
        )?;
        let offset_days = h0 / 360.0;
        Ok(if event.is_rising() {
            pos.transit_jd - offset_days
        } else {
            pos.transit_jd + offset_days
        })
    }

    /// Instant of a crossing event, in UTC.
    ///
    /// Fails with [`SolarError::NoEvent`] under polar conditions.
    pub fn event(&self, date: NaiveDate, event: SolarEvent) -> Result<DateTime<Utc>, SolarError> {
        instant::jd_to_utc(self.event_jd(date, event)?)
    }

    /// Instant of a crossing event, `None` when it does not occur.
    pub fn event_or_none(&self, date: NaiveDate, event: SolarEvent) -> Option<DateTime<Utc>> {
        self.event(date, event).ok()
    }

    /// Instant of a crossing event, projected into `tz`.
    pub fn event_in<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        event: SolarEvent,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, SolarError> {
        Ok(self.event(date, event)?.with_timezone(tz))
    }

    /// Solar transit (local solar noon), in UTC.
    pub fn solar_noon(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        instant::jd_to_utc(self.position_for(date).transit_jd)
    }

    /// Solar transit, projected into `tz`.
    pub fn solar_noon_in<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, SolarError> {
        Ok(self.solar_noon(date)?.with_timezone(tz))
    }

    pub fn sunrise(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::Sunrise)
    }

    pub fn sunset(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::Sunset)
    }

    pub fn civil_dawn(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::CivilDawn)
    }

    pub fn civil_dusk(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::CivilDusk)
    }

    pub fn nautical_dawn(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::NauticalDawn)
    }

    pub fn nautical_dusk(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::NauticalDusk)
    }

    pub fn astronomical_dawn(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::AstronomicalDawn)
    }

    pub fn astronomical_dusk(&self, date: NaiveDate) -> Result<DateTime<Utc>, SolarError> {
        self.event(date, SolarEvent::AstronomicalDusk)
    }

    pub fn sunrise_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::Sunrise)
    }

    pub fn sunset_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::Sunset)
    }

    pub fn civil_dawn_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::CivilDawn)
    }

    pub fn civil_dusk_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::CivilDusk)
    }

    pub fn nautical_dawn_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::NauticalDawn)
    }

    pub fn nautical_dusk_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::NauticalDusk)
    }

    pub fn astronomical_dawn_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::AstronomicalDawn)
    }

    pub fn astronomical_dusk_or_none(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.event_or_none(date, SolarEvent::AstronomicalDusk)
    }

    /// Daylight duration: sunset minus sunrise, or zero when either leg
    /// does not occur.
    pub fn day_length(&self, date: NaiveDate) -> TimeDelta {
        match (self.sunrise_or_none(date), self.sunset_or_none(date)) {
            (Some(rise), Some(set)) => set - rise,
            _ => TimeDelta::zero(),
        }
    }

    /// A crossing as an optional instant; internal faults still propagate.
    fn crossing(
        &self,
        date: NaiveDate,
        event: SolarEvent,
    ) -> Result<Option<DateTime<Utc>>, SolarError> {
        match self.event(date, event) {
            Ok(t) => Ok(Some(t)),
            Err(SolarError::NoEvent(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All nine named instants for one day, in UTC.
    ///
    /// Polar non-occurrence is reported per event as `None`; only internal
    /// faults fail the whole query.
    pub fn day_events(&self, date: NaiveDate) -> Result<SolarDay, SolarError> {
        Ok(SolarDay {
            astronomical_dawn: self.crossing(date, SolarEvent::AstronomicalDawn)?,
            nautical_dawn: self.crossing(date, SolarEvent::NauticalDawn)?,
            civil_dawn: self.crossing(date, SolarEvent::CivilDawn)?,
            sunrise: self.crossing(date, SolarEvent::Sunrise)?,
            solar_noon: self.solar_noon(date)?,
            sunset: self.crossing(date, SolarEvent::Sunset)?,
            civil_dusk: self.crossing(date, SolarEvent::CivilDusk)?,
            nautical_dusk: self.crossing(date, SolarEvent::NauticalDusk)?,
            astronomical_dusk: self.crossing(date, SolarEvent::AstronomicalDusk)?,
        })
    }

    /// All nine named instants, projected into `tz`.
    pub fn day_events_in<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> Result<SolarDay<Tz>, SolarError> {
        Ok(self.day_events(date)?.with_timezone(tz))
    }
}

impl From<GeoCoordinate> for SolarEngine {
    fn from(coordinate: GeoCoordinate) -> Self {
        Self::at(coordinate)
    }
}
