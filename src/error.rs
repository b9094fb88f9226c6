//! Error types for coordinate, method, and calendar inputs.

use thiserror::Error as ThisError;

/// Errors raised at the boundary of the calculators.
///
/// The calculations themselves are infallible once their inputs are
/// validated; times the sun geometry cannot produce are reported through
/// [`PrayerTime::Undefined`](crate::PrayerTime::Undefined) instead.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("unknown calculation method '{0}'")]
    UnknownMethod(String),

    #[error("invalid Hijri date {year}-{month:02}-{day:02}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    #[error("Gregorian date {year}-{month:02}-{day:02} is not representable")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
