//! Prayer time engine.

use chrono::{Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::method::{CalculationMethod, HighLatitudeRule, IshaRule, JuristicMethod};
use crate::sun::{julian_date, sun_position, SunPosition};
use crate::trig::{darccos, darccot, dcos, dsin, dtan, fix_hour, time_diff};

/// Sun depression at sunrise and sunset: refraction plus the solar radius.
pub const SUNRISE_ANGLE: f64 = 0.833;

/// Twilight angle assumed for minute-based Isha when adjusting for high
/// latitudes.
const DEFAULT_ISHA_ANGLE: f64 = 18.0;

/// A point on the Earth's surface, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// The five obligatory prayers, in order.
    pub const FIVE: [Prayer; 5] = [
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

/// Why the sun geometry yields no time for an event on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum UndefinedReason {
    /// The sun stays below this altitude all day (polar night for sunrise).
    SunAlwaysBelow { altitude_deg: f64 },
    /// The sun never sinks below this altitude (midnight sun, or twilight
    /// that lasts all night).
    SunAlwaysAbove { altitude_deg: f64 },
    /// The time falls outside the range of representable dates.
    OutOfRange,
}

/// One event of the day, either computed or geometrically undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PrayerTime {
    Computed(NaiveDateTime),
    Undefined(UndefinedReason),
}

impl PrayerTime {
    pub fn time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Computed(t) => Some(*t),
            Self::Undefined(_) => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

/// The day's times, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrayerTimesResult {
    pub date: NaiveDate,
    pub fajr: PrayerTime,
    pub sunrise: PrayerTime,
    pub dhuhr: PrayerTime,
    pub asr: PrayerTime,
    pub maghrib: PrayerTime,
    pub isha: PrayerTime,
}

impl PrayerTimesResult {
    pub fn get(&self, prayer: Prayer) -> PrayerTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, PrayerTime)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Decimal hours (or degrees), or why the sun geometry has no such value.
type Hours = std::result::Result<f64, UndefinedReason>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DayHours {
    fajr: Hours,
    sunrise: Hours,
    dhuhr: f64,
    asr: Hours,
    sunset: Hours,
    maghrib: Hours,
    isha: Hours,
}

/// Calculation preferences. Cheap to copy; holds no per-day state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerTimes {
    pub method: CalculationMethod,
    pub asr_juristic: JuristicMethod,
    pub high_latitude_rule: HighLatitudeRule,
    /// Minutes added to Dhuhr after solar noon.
    pub dhuhr_minutes: f64,
}

impl PrayerTimes {
    pub fn new(method: CalculationMethod, asr_juristic: JuristicMethod) -> Self {
        Self {
            method,
            asr_juristic,
            ..Default::default()
        }
    }

    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    /// Compute the six times for `date` at `coord`, expressed in the local
    /// time of `utc_offset`.
    pub fn calculate(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        utc_offset: FixedOffset,
    ) -> PrayerTimesResult {
        let timezone = utc_offset.local_minus_utc() as f64 / 3600.0;
        let hours = self.compute_day_times(coord, date, timezone);
        PrayerTimesResult {
            date,
            fajr: to_prayer_time(date, hours.fajr),
            sunrise: to_prayer_time(date, hours.sunrise),
            dhuhr: to_prayer_time(date, Ok(hours.dhuhr)),
            asr: to_prayer_time(date, hours.asr),
            maghrib: to_prayer_time(date, hours.maghrib),
            isha: to_prayer_time(date, hours.isha),
        }
    }

    /// Like [`calculate`](Self::calculate) with the host's UTC offset as of
    /// local noon on `date`, so the offset follows daylight saving.
    pub fn calculate_local(&self, coord: GeoCoordinate, date: NaiveDate) -> PrayerTimesResult {
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        let offset = Local
            .offset_from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Local.offset_from_utc_datetime(&noon));
        self.calculate(coord, date, offset)
    }

    fn compute_day_times(&self, coord: GeoCoordinate, date: NaiveDate, timezone: f64) -> DayHours {
        let config = self.method.config();
        let lat = coord.latitude;
        let lng = coord.longitude;

        let jd = julian_date(date) - lng / (15. * 24.);
        let sun = sun_position(jd + 0.5);
        log::debug!(
            "{date} at ({lat}, {lng}): jd {jd:.5}, declination {:.4}, equation of time {:.5}h",
            sun.declination,
            sun.equation_of_time
        );

        let dhuhr = fix_hour(12. - sun.equation_of_time) + timezone - lng / 15.;
        let before = |angle: f64| hour_angle(lat, sun, angle).map(|h| dhuhr - h);
        let after = |angle: f64| hour_angle(lat, sun, angle).map(|h| dhuhr + h);

        let fajr = before(config.fajr_angle);
        let sunrise = before(SUNRISE_ANGLE);
        let asr = self.compute_asr(lat, sun).and_then(|angle| after(-angle));
        let sunset = after(SUNRISE_ANGLE);
        let maghrib = match config.maghrib_minutes {
            Some(minutes) => sunset.map(|t| t + minutes / 60.0),
            None => sunset,
        };
        let isha = match config.isha {
            IshaRule::Angle(angle) => after(angle),
            IshaRule::MinutesAfterMaghrib(minutes) => maghrib.map(|t| t + minutes / 60.0),
        };

        let mut times = DayHours {
            fajr,
            sunrise,
            dhuhr: dhuhr + self.dhuhr_minutes / 60.0,
            asr,
            sunset,
            maghrib,
            isha,
        };
        self.adjust_high_lat_times(&mut times);
        times
    }

    /// Sun altitude at the start of Asr, from the shadow-length rule.
    fn compute_asr(&self, lat: f64, sun: SunPosition) -> Hours {
        let step = self.asr_juristic.shadow_factor();
        let altitude = darccot(step + dtan((lat - sun.declination).abs()));
        if altitude > 0.0 {
            Ok(altitude)
        } else {
            Err(UndefinedReason::SunAlwaysBelow {
                altitude_deg: altitude,
            })
        }
    }

    /* adjust Fajr and Isha for locations in higher latitudes */
    fn adjust_high_lat_times(&self, times: &mut DayHours) {
        let (Ok(sunrise), Ok(sunset)) = (times.sunrise, times.sunset) else {
            return;
        };
        let config = self.method.config();
        let night_time = time_diff(sunset, sunrise); // sunset to sunrise

        // Adjust Fajr
        if let Some(portion) = self.high_latitude_rule.night_portion(config.fajr_angle) {
            let fajr_diff = portion * night_time;
            let too_early = times.fajr.map_or(true, |t| time_diff(t, sunrise) > fajr_diff);
            if too_early {
                log::debug!("fajr adjusted to {fajr_diff:.3}h before sunrise");
                times.fajr = Ok(sunrise - fajr_diff);
            }
        }

        // Adjust Isha
        let isha_angle = match config.isha {
            IshaRule::Angle(angle) => angle,
            IshaRule::MinutesAfterMaghrib(_) => DEFAULT_ISHA_ANGLE,
        };
        if let Some(portion) = self.high_latitude_rule.night_portion(isha_angle) {
            let isha_diff = portion * night_time;
            let too_late = times.isha.map_or(true, |t| time_diff(sunset, t) > isha_diff);
            if too_late {
                log::debug!("isha adjusted to {isha_diff:.3}h after sunset");
                times.isha = Ok(sunset + isha_diff);
            }
        }
    }
}

/// Hours between solar noon and the moment the sun is `angle` degrees
/// below the horizon (negative `angle` means above it).
fn hour_angle(lat: f64, sun: SunPosition, angle: f64) -> Hours {
    let dec = sun.declination;
    let cos_h = (-dsin(angle) - dsin(lat) * dsin(dec)) / (dcos(lat) * dcos(dec));
    if cos_h > 1.0 {
        Err(UndefinedReason::SunAlwaysBelow {
            altitude_deg: -angle,
        })
    } else if cos_h < -1.0 {
        Err(UndefinedReason::SunAlwaysAbove {
            altitude_deg: -angle,
        })
    } else {
        Ok(darccos(cos_h) / 15.0)
    }
}

/// Place decimal `hours` on `date`, rounded to the minute. Hours outside
/// `[0, 24)` land on the neighbouring day, or are [`OutOfRange`] when that
/// day is past [`NaiveDate::MIN`] or [`NaiveDate::MAX`].
///
/// [`OutOfRange`]: UndefinedReason::OutOfRange
fn to_prayer_time(date: NaiveDate, hours: Hours) -> PrayerTime {
    let placed = hours.and_then(|h| {
        let minutes = (h * 60.0).round() as i64;
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::minutes(minutes))
            .ok_or(UndefinedReason::OutOfRange)
    });
    match placed {
        Ok(time) => PrayerTime::Computed(time),
        Err(reason) => {
            log::debug!("no time on {date}: {reason:?}");
            PrayerTime::Undefined(reason)
        }
    }
}

/// Compute times from a stored method identifier and juristic flag.
///
/// Unknown identifiers fall back to Karachi (see
/// [`CalculationMethod::from_id`]).
pub fn calculate(
    coord: GeoCoordinate,
    date: NaiveDate,
    method: &str,
    asr_juristic: JuristicMethod,
    utc_offset: FixedOffset,
) -> PrayerTimesResult {
    PrayerTimes::new(CalculationMethod::from_id(method), asr_juristic).calculate(
        coord,
        date,
        utc_offset,
    )
}
