//! Gregorian <-> Hijri conversion through the Julian Day Number.
//!
//! This is the tabular (arithmetic) Islamic calendar: a 30-year cycle of
//! 10631 days with 11 leap years of 355 days, odd months of 30 days and
//! even months of 29. It does not follow moon sighting and can drift a day
//! either way from the observed calendar.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Error, Result};

/// Julian Day Number of 1 Muharram AH 1 (civil epoch, 19 July 622).
pub const EPOCH_JDN: i64 = 1948440;

/// Days in a 30-year Hijri cycle.
const CYCLE_DAYS: i64 = 10631;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhul Qadah",
    "Dhul Hijjah",
];

const MONTH_NAMES_ARABIC: [&str; 12] = [
    "مُحَرَّم",
    "صَفَر",
    "رَبِيع الأَوَّل",
    "رَبِيع الثَّانِي",
    "جُمَادَىٰ الأُولَىٰ",
    "جُمَادَىٰ الآخِرَة",
    "رَجَب",
    "شَعْبَان",
    "رَمَضَان",
    "شَوَّال",
    "ذُو القَعْدَة",
    "ذُو الحِجَّة",
];

/// A date in the tabular Hijri calendar.
///
/// Serializes with both month names alongside the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "NamedIslamicDate")]
pub struct IslamicDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Serialize)]
struct NamedIslamicDate {
    year: i32,
    month: u32,
    day: u32,
    month_name: &'static str,
    month_name_arabic: &'static str,
}

impl From<IslamicDate> for NamedIslamicDate {
    fn from(date: IslamicDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            month_name: date.month_name(),
            month_name_arabic: date.month_name_arabic(),
        }
    }
}

impl IslamicDate {
    /// Validated constructor; day 30 of Dhul Hijjah is only accepted in
    /// leap years.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month_of_year(year, month) {
            return Err(Error::InvalidHijriDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn month_name_arabic(&self) -> &'static str {
        month_name_arabic(self.month)
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate> {
        to_gregorian(self.year, self.month, self.day)
    }
}

impl fmt::Display for IslamicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

/// English transliteration of a month number, `""` outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

pub fn month_name_arabic(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES_ARABIC.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Month length by parity alone: 30 for odd months, 29 for even.
///
/// Ignores the leap day of Dhul Hijjah; see [`days_in_month_of_year`].
pub fn days_in_month(month: u32) -> u32 {
    if month % 2 == 1 {
        30
    } else {
        29
    }
}

/// Whether `year` is one of the 11 leap years of its 30-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

pub fn days_in_month_of_year(year: i32, month: u32) -> u32 {
    if month == 12 && is_leap_year(year) {
        30
    } else {
        days_in_month(month)
    }
}

/// Convert a Gregorian date to the tabular Hijri calendar.
pub fn to_islamic(date: NaiveDate) -> IslamicDate {
    let jdn = gregorian_to_jdn(date.year(), date.month(), date.day());
    jdn_to_islamic(jdn)
}

/// Convert a Hijri date to the Gregorian calendar.
pub fn to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let date = IslamicDate::new(year, month, day)?;
    let jdn = islamic_to_jdn(date.year, date.month, date.day);
    let (y, m, d) = jdn_to_gregorian(jdn);
    // a Gregorian year is never further from zero than year + 622 AH
    let year = y as i32;
    NaiveDate::from_ymd_opt(year, m, d).ok_or(Error::InvalidGregorianDate {
        year,
        month: m,
        day: d,
    })
}

/// Julian Day Number of a proleptic Gregorian date.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, u32, u32) {
    let mut l = jdn + 68569;
    let n = (4 * l).div_euclid(146097);
    l -= (146097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1461001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year, month as u32, day as u32)
}

pub fn islamic_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2)
        + day as i64
        + EPOCH_JDN
        - 385
}

pub fn jdn_to_islamic(jdn: i64) -> IslamicDate {
    let mut l = jdn - EPOCH_JDN + 10632;
    let n = (l - 1).div_euclid(CYCLE_DAYS);
    l = l - CYCLE_DAYS * n + 354;
    // year within the cycle
    let j = (10985 - l).div_euclid(5316) * (50 * l).div_euclid(17719)
        + l.div_euclid(5670) * (43 * l).div_euclid(15238);
    l = l - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
        - j.div_euclid(16) * (15238 * j).div_euclid(43)
        + 29;
    let month = (24 * l).div_euclid(709);
    let day = l - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;
    IslamicDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}
