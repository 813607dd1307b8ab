//! Re-expressing [`SolarTimes`] in another time zone.

use chrono::{Local, TimeZone};

use crate::model::SolarTimes;

impl<Tz: TimeZone> SolarTimes<Tz> {
    /// Returns a copy with every timestamp expressed in `tz`.
    ///
    /// Instants and `day_length` are unchanged; `self` is left as is.
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> SolarTimes<Tz2> {
        SolarTimes {
            sunrise: self.sunrise.with_timezone(tz),
            sunset: self.sunset.with_timezone(tz),
            day_length: self.day_length,
            solar_noon: self.solar_noon.with_timezone(tz),
            civil_twilight_begin: self.civil_twilight_begin.with_timezone(tz),
            civil_twilight_end: self.civil_twilight_end.with_timezone(tz),
            nautical_twilight_begin: self.nautical_twilight_begin.with_timezone(tz),
            nautical_twilight_end: self.nautical_twilight_end.with_timezone(tz),
            astronomical_twilight_begin: self.astronomical_twilight_begin.with_timezone(tz),
            astronomical_twilight_end: self.astronomical_twilight_end.with_timezone(tz),
        }
    }

    /// Returns a copy in the process's local time zone.
    pub fn to_local(&self) -> SolarTimes<Local> {
        self.with_timezone(&Local)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Timelike};

    use crate::model::{SolarEvent, fixtures};

    #[test]
    fn to_local_keeps_instants() {
        let utc = fixtures::sample();
        let local = utc.to_local();

        for &event in SolarEvent::all() {
            assert_eq!(
                utc.get(event).timestamp(),
                local.get(event).timestamp(),
                "{event} moved"
            );
        }
    }

    #[test]
    fn to_local_keeps_day_length() {
        let utc = fixtures::sample();
        assert_eq!(utc.to_local().day_length, utc.day_length);
    }

    #[test]
    fn to_local_is_idempotent() {
        let utc = fixtures::sample();
        let once = utc.to_local();
        let twice = once.to_local();

        assert_eq!(once, twice);
        for &event in SolarEvent::all() {
            assert_eq!(once.get(event).offset(), twice.get(event).offset());
        }
    }

    #[test]
    fn to_local_leaves_input_untouched() {
        let utc = fixtures::sample();
        let before = utc.sunrise.to_rfc3339();

        let _ = utc.to_local();

        assert_eq!(utc.sunrise.to_rfc3339(), before);
        assert_eq!(utc, fixtures::sample());
    }

    #[test]
    fn with_timezone_changes_wall_clock_only() {
        let utc = fixtures::sample();
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let shifted = utc.with_timezone(&cest);

        assert_eq!(utc.sunrise.hour(), 5);
        assert_eq!(shifted.sunrise.hour(), 7);
        assert_eq!(shifted.sunrise.minute(), 5);
        assert_eq!(shifted.sunrise.to_rfc3339(), "2015-05-21T07:05:35+02:00");
        assert_eq!(shifted, utc);
    }
}
