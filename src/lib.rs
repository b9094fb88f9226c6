/*-------------------------- In the name of God ----------------------------*\

    islamic_times (rust)
    Islamic prayer times and Hijri calendar library
    Based on libprayertimes 1.0 Cpp library
    Based on PrayTimes 1.1 JavaScript library

----------------------------- Copyright Block --------------------------------

Copyright (C) 2007-2010 PrayTimes.org

Developed By: Nbiba Bedis <bedis at nbiba at gmail dot com>
Based on Cpp Code By: Mohammad Ebrahim Mohammadi Panah <ebrahim at mohammadi dot ir>
Based on a JavaScript Code By: Hamid Zarrabi-Zadeh

License: GNU GPL v3.0

TERMS OF USE:
    Permission is granted to use this code, with or
    without modification, in any website or application
    provided that credit is given to the original work
    with a link back to PrayTimes.org.

This program is distributed in the hope that it will
be useful, but WITHOUT ANY WARRANTY.

PLEASE DO NOT REMOVE THIS COPYRIGHT BLOCK.

------------------------------------------------------------------------------

User's Manual:
http://praytimes.org/manual

Calculating Formulas:
http://praytimes.org/calculation

\*--------------------------------------------------------------------------*/

//! Islamic prayer times from solar position, and the tabular Hijri calendar.
//!
//! ```
//! use chrono::{FixedOffset, NaiveDate};
//! use islamic_times::{CalculationMethod, GeoCoordinate, JuristicMethod, PrayerTimes};
//!
//! let dhaka = GeoCoordinate::new(23.8103, 90.4125)?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let offset = FixedOffset::east_opt(6 * 3600).unwrap();
//!
//! let times = PrayerTimes::new(CalculationMethod::Karachi, JuristicMethod::Shafii)
//!     .calculate(dhaka, date, offset);
//! assert_eq!(times.to_easy24().fajr, "04:56");
//!
//! let hijri = islamic_times::to_islamic(date);
//! assert_eq!(hijri.to_string(), "1 Ramadan 1445 AH");
//! # Ok::<(), islamic_times::Error>(())
//! ```

pub mod easy;
mod error;
pub mod hijri;
pub mod holiday;
mod method;
mod prayer;
pub mod sun;
mod trig;

pub use error::{Error, Result};
pub use hijri::{days_in_month, to_gregorian, to_islamic, IslamicDate};
pub use holiday::{HolidayKind, IslamicHoliday, UpcomingHoliday, HOLIDAYS};
pub use method::{CalculationMethod, HighLatitudeRule, IshaRule, JuristicMethod, MethodConfig};
pub use prayer::{
    calculate, GeoCoordinate, Prayer, PrayerTime, PrayerTimes, PrayerTimesResult,
    UndefinedReason, SUNRISE_ANGLE,
};
pub use sun::{sun_position, SunPosition};
