//! Display helpers for the UI layer.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::prayer::{Prayer, PrayerTime, PrayerTimesResult};

/// Placeholder shown for a time that does not exist on the day.
pub const INVALID_TIME: &str = "-----";

impl PrayerTimesResult {
    pub fn to_easy24(&self) -> EasyTimes24 {
        let fmt = |t: PrayerTime| match t {
            PrayerTime::Computed(t) => t.format("%H:%M").to_string(),
            PrayerTime::Undefined(_) => INVALID_TIME.into(),
        };
        EasyTimes24 {
            fajr: fmt(self.fajr),
            sunrise: fmt(self.sunrise),
            dhuhr: fmt(self.dhuhr),
            asr: fmt(self.asr),
            maghrib: fmt(self.maghrib),
            isha: fmt(self.isha),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EasyTimes24 {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// 12-hour clock time, e.g. `5:07 AM`.
pub fn format_time(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Same as [`format_time`], with [`INVALID_TIME`] for undefined times.
pub fn format_prayer_time(time: PrayerTime) -> String {
    time.time()
        .map_or_else(|| INVALID_TIME.to_string(), format_time)
}

/// Time left until `target` as `"Xh Ym"`. A target earlier than `now` is
/// taken to be the same clock time tomorrow.
pub fn time_until(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let mut diff = target - now;
    if diff < Duration::zero() {
        diff = diff + Duration::hours(24);
    }
    let minutes = diff.num_minutes();
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// The first of the five prayers still ahead of `now`, or Fajr once Isha
/// has passed. `None` only when Fajr itself is undefined.
pub fn next_upcoming(
    times: &PrayerTimesResult,
    now: NaiveDateTime,
) -> Option<(Prayer, NaiveDateTime)> {
    Prayer::FIVE
        .into_iter()
        .filter_map(|p| times.get(p).time().map(|t| (p, t)))
        .find(|&(_, t)| t > now)
        .or_else(|| times.fajr.time().map(|t| (Prayer::Fajr, t)))
}
