//! Low-precision solar ephemeris.
//!
//! About 0.01° accuracy for a few centuries either side of J2000.0, which is
//! well inside a minute of prayer time.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::trig::{darcsin, darctan2, dcos, dsin, fix_angle, fix_hour};

/// Julian date of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;

/// Solar declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Apparent minus mean solar time, in hours.
    ///
    /// Not reduced: around the March equinox this comes out a whole day too
    /// large, so reduce with `fix_hour(12 - equation_of_time)` before use.
    pub equation_of_time: f64,
}

/// Julian date at 0h UT of a civil (proleptic Gregorian) date.
pub fn julian_date(date: NaiveDate) -> f64 {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.).floor();
    let b = 2. - a + (a / 4.).floor();

    (365.25 * (year + 4716.)).floor() + (30.6001 * (month + 1.)).floor() + day + b - 1524.5
}

/// Compute declination angle of sun and equation of time.
///
/// Total over all finite inputs; NaN in gives NaN out.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2. * g));

    let e = 23.439 - 0.00000036 * d;

    let declination = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    SunPosition {
        declination,
        equation_of_time: q / 15.0 - ra,
    }
}
