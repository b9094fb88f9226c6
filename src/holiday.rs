//! Islamic holidays keyed by Hijri month and day.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::hijri::{to_gregorian, to_islamic, IslamicDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Major,
    Minor,
    Fasting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IslamicHoliday {
    pub name: &'static str,
    pub name_arabic: &'static str,
    pub description: &'static str,
    pub islamic_month: u32,
    pub islamic_day: u32,
    pub kind: HolidayKind,
}

pub static HOLIDAYS: [IslamicHoliday; 10] = [
    IslamicHoliday {
        name: "Islamic New Year",
        name_arabic: "رأس السنة الهجرية",
        description: "The first day of Muharram, marking the start of the Hijri year.",
        islamic_month: 1,
        islamic_day: 1,
        kind: HolidayKind::Major,
    },
    IslamicHoliday {
        name: "Day of Ashura",
        name_arabic: "يوم عاشوراء",
        description: "The tenth of Muharram, a recommended day of fasting.",
        islamic_month: 1,
        islamic_day: 10,
        kind: HolidayKind::Fasting,
    },
    IslamicHoliday {
        name: "Mawlid an-Nabi",
        name_arabic: "المولد النبوي",
        description: "Commemoration of the birth of the Prophet Muhammad.",
        islamic_month: 3,
        islamic_day: 12,
        kind: HolidayKind::Minor,
    },
    IslamicHoliday {
        name: "Isra and Miraj",
        name_arabic: "الإسراء والمعراج",
        description: "The Night Journey and Ascension of the Prophet.",
        islamic_month: 7,
        islamic_day: 27,
        kind: HolidayKind::Minor,
    },
    IslamicHoliday {
        name: "Mid-Shaban",
        name_arabic: "ليلة النصف من شعبان",
        description: "The night of the fifteenth of Shaban.",
        islamic_month: 8,
        islamic_day: 15,
        kind: HolidayKind::Minor,
    },
    IslamicHoliday {
        name: "First Day of Ramadan",
        name_arabic: "أول يوم من رمضان",
        description: "The start of the month of fasting.",
        islamic_month: 9,
        islamic_day: 1,
        kind: HolidayKind::Fasting,
    },
    IslamicHoliday {
        name: "Laylat al-Qadr",
        name_arabic: "ليلة القدر",
        description: "The Night of Decree, commonly observed on the 27th of Ramadan.",
        islamic_month: 9,
        islamic_day: 27,
        kind: HolidayKind::Major,
    },
    IslamicHoliday {
        name: "Eid al-Fitr",
        name_arabic: "عيد الفطر",
        description: "The festival marking the end of Ramadan.",
        islamic_month: 10,
        islamic_day: 1,
        kind: HolidayKind::Major,
    },
    IslamicHoliday {
        name: "Day of Arafah",
        name_arabic: "يوم عرفة",
        description: "The ninth of Dhul Hijjah, the day of standing at Arafah.",
        islamic_month: 12,
        islamic_day: 9,
        kind: HolidayKind::Fasting,
    },
    IslamicHoliday {
        name: "Eid al-Adha",
        name_arabic: "عيد الأضحى",
        description: "The festival of sacrifice.",
        islamic_month: 12,
        islamic_day: 10,
        kind: HolidayKind::Major,
    },
];

/// The next Gregorian occurrence of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingHoliday {
    pub holiday: &'static IslamicHoliday,
    pub date: NaiveDate,
    pub islamic_date: IslamicDate,
    /// Days from "today"; 0 when the holiday is today.
    pub days_until: i64,
}

/// Holidays falling on `date`.
pub fn for_date(date: &IslamicDate) -> Vec<&'static IslamicHoliday> {
    HOLIDAYS
        .iter()
        .filter(|h| h.islamic_month == date.month && h.islamic_day == date.day)
        .collect()
}

/// Holidays in Hijri `month`, in calendar order.
pub fn in_month(month: u32) -> Vec<&'static IslamicHoliday> {
    HOLIDAYS
        .iter()
        .filter(|h| h.islamic_month == month)
        .collect()
}

/// The next `limit` holidays on or after `today`, soonest first.
///
/// Each holiday is placed in the current Hijri year, or the next one if its
/// day has already passed.
pub fn upcoming(today: NaiveDate, limit: usize) -> Vec<UpcomingHoliday> {
    let now = to_islamic(today);
    let mut upcoming: Vec<_> = HOLIDAYS
        .iter()
        .filter_map(|holiday| {
            let passed = (holiday.islamic_month, holiday.islamic_day) < (now.month, now.day);
            let year = if passed { now.year + 1 } else { now.year };
            let date = to_gregorian(year, holiday.islamic_month, holiday.islamic_day).ok()?;
            let days_until = (date - today).num_days();
            log::trace!("{} {year}: {date} in {days_until} days", holiday.name);
            Some(UpcomingHoliday {
                holiday,
                date,
                islamic_date: to_islamic(date),
                days_until,
            })
        })
        .filter(|u| u.days_until >= 0)
        .collect();
    upcoming.sort_by_key(|u| u.days_until);
    upcoming.truncate(limit);
    upcoming
}

/// [`upcoming`] from the host's current local date.
pub fn upcoming_from_now(limit: usize) -> Vec<UpcomingHoliday> {
    upcoming(Local::now().date_naive(), limit)
}
