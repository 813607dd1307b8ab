use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A point on the globe in signed decimal degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One of the instants reported for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    AstronomicalTwilightBegin,
    NauticalTwilightBegin,
    CivilTwilightBegin,
    Sunrise,
    SolarNoon,
    Sunset,
    CivilTwilightEnd,
    NauticalTwilightEnd,
    AstronomicalTwilightEnd,
}

impl SolarEvent {
    pub fn label(&self) -> &'static str {
        match self {
            SolarEvent::AstronomicalTwilightBegin => "Astronomical twilight begin",
            SolarEvent::NauticalTwilightBegin => "Nautical twilight begin",
            SolarEvent::CivilTwilightBegin => "Civil twilight begin",
            SolarEvent::Sunrise => "Sunrise",
            SolarEvent::SolarNoon => "Solar noon",
            SolarEvent::Sunset => "Sunset",
            SolarEvent::CivilTwilightEnd => "Civil twilight end",
            SolarEvent::NauticalTwilightEnd => "Nautical twilight end",
            SolarEvent::AstronomicalTwilightEnd => "Astronomical twilight end",
        }
    }

    /// All events, ordered as they occur on a day with a normal day/night cycle.
    pub const fn all() -> &'static [SolarEvent] {
        &[
            SolarEvent::AstronomicalTwilightBegin,
            SolarEvent::NauticalTwilightBegin,
            SolarEvent::CivilTwilightBegin,
            SolarEvent::Sunrise,
            SolarEvent::SolarNoon,
            SolarEvent::Sunset,
            SolarEvent::CivilTwilightEnd,
            SolarEvent::NauticalTwilightEnd,
            SolarEvent::AstronomicalTwilightEnd,
        ]
    }
}

impl std::fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Solar events for one location and one day, as returned by sunrise-sunset.org.
///
/// Values decoded from the API are in UTC. [`SolarTimes::to_local`] and
/// [`SolarTimes::with_timezone`] produce copies expressed in another zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = "DateTime<Tz>: Deserialize<'de>"))]
pub struct SolarTimes<Tz: TimeZone = Utc> {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    /// Seconds between sunrise and sunset, as reported by the API.
    pub day_length: u32,
    pub solar_noon: DateTime<Tz>,
    pub civil_twilight_begin: DateTime<Tz>,
    pub civil_twilight_end: DateTime<Tz>,
    pub nautical_twilight_begin: DateTime<Tz>,
    pub nautical_twilight_end: DateTime<Tz>,
    pub astronomical_twilight_begin: DateTime<Tz>,
    pub astronomical_twilight_end: DateTime<Tz>,
}

impl<Tz: TimeZone> SolarTimes<Tz> {
    pub fn get(&self, event: SolarEvent) -> &DateTime<Tz> {
        match event {
            SolarEvent::AstronomicalTwilightBegin => &self.astronomical_twilight_begin,
            SolarEvent::NauticalTwilightBegin => &self.nautical_twilight_begin,
            SolarEvent::CivilTwilightBegin => &self.civil_twilight_begin,
            SolarEvent::Sunrise => &self.sunrise,
            SolarEvent::SolarNoon => &self.solar_noon,
            SolarEvent::Sunset => &self.sunset,
            SolarEvent::CivilTwilightEnd => &self.civil_twilight_end,
            SolarEvent::NauticalTwilightEnd => &self.nautical_twilight_end,
            SolarEvent::AstronomicalTwilightEnd => &self.astronomical_twilight_end,
        }
    }

    /// Iterate over every event in [`SolarEvent::all`] order.
    pub fn events(&self) -> impl Iterator<Item = (SolarEvent, &DateTime<Tz>)> + '_ {
        SolarEvent::all().iter().map(move |&event| (event, self.get(event)))
    }

    pub fn day_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.day_length))
    }
}

// Two values are equal when they describe the same instants, whatever zone
// each one is expressed in.
impl<Tz: TimeZone, Tz2: TimeZone> PartialEq<SolarTimes<Tz2>> for SolarTimes<Tz> {
    fn eq(&self, other: &SolarTimes<Tz2>) -> bool {
        self.day_length == other.day_length
            && SolarEvent::all()
                .iter()
                .all(|&event| *self.get(event) == *other.get(event))
    }
}
