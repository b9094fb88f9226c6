#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};
    use nanoserde::DeJson;
    use proptest::prelude::*;

    use islamic_times::{
        days_in_month, easy, hijri, holiday, to_gregorian, to_islamic, CalculationMethod,
        GeoCoordinate, HighLatitudeRule, JuristicMethod, Prayer, PrayerTimes, PrayerTimesResult,
    };

    #[derive(DeJson, Debug)]
    struct PrayerGolden {
        name: String,
        lat: f64,
        lon: f64,
        year: i32,
        month: u32,
        day: u32,
        utc_offset_minutes: i32,
        method: String,
        juristic: u8,
        fajr: String,
        sunrise: String,
        dhuhr: String,
        asr: String,
        maghrib: String,
        isha: String,
    }

    #[derive(DeJson, Debug)]
    struct HijriGolden {
        gregorian_year: i32,
        gregorian_month: u32,
        gregorian_day: u32,
        hijri_year: i32,
        hijri_month: u32,
        hijri_day: u32,
    }

    fn load<T: DeJson>(json: &str) -> Vec<T> {
        Vec::<T>::deserialize_json(json).unwrap()
    }

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn dhaka() -> GeoCoordinate {
        GeoCoordinate::new(23.81, 90.41).unwrap()
    }

    fn clock_minutes(hhmm: &str) -> i64 {
        let (h, m) = hhmm.split_once(':').unwrap();
        h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
    }

    /// Minutes between two clock times, the short way round midnight.
    fn clock_distance(a: &str, b: &str) -> i64 {
        let d = (clock_minutes(a) - clock_minutes(b)).rem_euclid(24 * 60);
        d.min(24 * 60 - d)
    }

    fn assert_ordered(times: &PrayerTimesResult) {
        let all: Vec<_> = times
            .iter()
            .map(|(p, t)| (p, t.time().unwrap_or_else(|| panic!("{p:?} undefined"))))
            .collect();
        for pair in all.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{:?} not before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prayer_times_match_golden_table() {
        let rows: Vec<PrayerGolden> = load(include_str!("data/prayer_golden.json"));
        assert!(!rows.is_empty());
        for row in rows {
            let coord = GeoCoordinate::new(row.lat, row.lon).unwrap();
            let date = NaiveDate::from_ymd_opt(row.year, row.month, row.day).unwrap();
            let tz = FixedOffset::east_opt(row.utc_offset_minutes * 60).unwrap();
            let method = row.method.parse::<CalculationMethod>().unwrap();
            let pt = PrayerTimes::new(method, JuristicMethod::from(row.juristic));
            let got = pt.calculate(coord, date, tz).to_easy24();
            for (prayer, got, want) in [
                ("fajr", &got.fajr, &row.fajr),
                ("sunrise", &got.sunrise, &row.sunrise),
                ("dhuhr", &got.dhuhr, &row.dhuhr),
                ("asr", &got.asr, &row.asr),
                ("maghrib", &got.maghrib, &row.maghrib),
                ("isha", &got.isha, &row.isha),
            ] {
                assert!(
                    clock_distance(got, want) <= 1,
                    "{} {date} {prayer}: got {got}, want {want}",
                    row.name
                );
            }
        }
    }

    #[test]
    fn hijri_matches_golden_table() {
        let rows: Vec<HijriGolden> = load(include_str!("data/hijri_golden.json"));
        for row in rows {
            let g = NaiveDate::from_ymd_opt(row.gregorian_year, row.gregorian_month, row.gregorian_day)
                .unwrap();
            let h = to_islamic(g);
            assert_eq!(
                (h.year, h.month, h.day),
                (row.hijri_year, row.hijri_month, row.hijri_day),
                "{g}"
            );
            assert_eq!(to_gregorian(h.year, h.month, h.day), Ok(g));
        }
    }

    proptest! {
    #[test]
    fn hijri_round_trip(year in 1..=2000i32, month in 1..=12u32, day_seed in 0..30u32) {
        let day = day_seed % days_in_month(month) + 1;
        let g = to_gregorian(year, month, day).unwrap();
        let h = to_islamic(g);
        prop_assert_eq!((h.year, h.month, h.day), (year, month, day));
    }

    #[test]
    fn gregorian_round_trip(days in 0i64..200_000) {
        let g = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap() + Duration::days(days);
        let h = to_islamic(g);
        prop_assert_eq!(to_gregorian(h.year, h.month, h.day), Ok(g));
    }

    #[test]
    fn consecutive_days_advance_hijri_by_one(days in 0i64..100_000) {
        let g = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days);
        let a = to_islamic(g);
        let b = to_islamic(g + Duration::days(1));
        if a.day < hijri::days_in_month_of_year(a.year, a.month) {
            prop_assert_eq!((b.year, b.month, b.day), (a.year, a.month, a.day + 1));
        } else {
            prop_assert_eq!(b.day, 1);
        }
    }

    #[test]
    fn dhaka_times_are_ordered(year in 1950..2100i32, ordinal in 1..=365u32, method_idx in 0..7usize, hanafi in any::<bool>()) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let method = CalculationMethod::ALL[method_idx];
        let juristic = if hanafi { JuristicMethod::Hanafi } else { JuristicMethod::Shafii };
        let times = PrayerTimes::new(method, juristic).calculate(dhaka(), date, offset(6));
        assert_ordered(&times);
    }

    #[test]
    fn isna_fajr_later_than_mwl(year in 1950..2100i32, ordinal in 1..=365u32) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let isna = PrayerTimes::new(CalculationMethod::Isna, JuristicMethod::Shafii)
            .calculate(dhaka(), date, offset(6));
        let mwl = PrayerTimes::new(CalculationMethod::Mwl, JuristicMethod::Shafii)
            .calculate(dhaka(), date, offset(6));
        prop_assert!(isna.fajr.time().unwrap() > mwl.fajr.time().unwrap());
    }

    #[test]
    fn hanafi_asr_later_than_shafii(year in 1950..2100i32, ordinal in 1..=365u32) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let shafii = PrayerTimes::new(CalculationMethod::Karachi, JuristicMethod::Shafii)
            .calculate(dhaka(), date, offset(6));
        let hanafi = PrayerTimes::new(CalculationMethod::Karachi, JuristicMethod::Hanafi)
            .calculate(dhaka(), date, offset(6));
        prop_assert!(hanafi.asr.time().unwrap() > shafii.asr.time().unwrap());
    }

    #[test]
    fn upcoming_is_sorted(days in 0i64..20_000, limit in 0..12usize) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days);
        let list = holiday::upcoming(today, limit);
        prop_assert_eq!(list.len(), limit.min(holiday::HOLIDAYS.len()));
        for pair in list.windows(2) {
            prop_assert!(pair[0].days_until <= pair[1].days_until);
        }
        for u in &list {
            prop_assert!(u.days_until >= 0 && u.days_until < 360);
            prop_assert_eq!(u.date, today + Duration::days(u.days_until));
        }
    }
        }

    #[test]
    fn makkah_isha_is_ninety_minutes_after_maghrib() {
        let makkah = GeoCoordinate::new(21.4225, 39.8262).unwrap();
        let solstice = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let times = islamic_times::calculate(
            makkah,
            solstice,
            "makkah",
            JuristicMethod::Shafii,
            offset(3),
        );
        assert_eq!(
            times.isha.time().unwrap() - times.maghrib.time().unwrap(),
            Duration::minutes(90)
        );
    }

    #[test]
    fn ramadan_1445_starts_11_march_2024() {
        let h = to_islamic(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!((h.year, h.month), (1445, 9));
        let found = holiday::for_date(&h);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "First Day of Ramadan");
    }

    #[test]
    fn upcoming_five() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let list = holiday::upcoming(today, 5);
        assert_eq!(list.len(), 5);
        assert!(list.windows(2).all(|w| w[0].days_until <= w[1].days_until));
    }

    #[test]
    fn next_prayer_and_countdown() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let times = PrayerTimes::default().calculate(dhaka(), date, offset(6));
        let now = date.and_time(NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        let (prayer, at) = easy::next_upcoming(&times, now).unwrap();
        assert_eq!(prayer, Prayer::Asr);
        assert_eq!(easy::format_time(at), "3:32 PM");
        assert_eq!(easy::time_until(at, now), "2h 32m");
    }

    #[test]
    fn polar_times_are_placeholders() {
        let svalbard = GeoCoordinate::new(78.2232, 15.6267).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let times = PrayerTimes::default().calculate(svalbard, date, offset(1));
        let shown = times.to_easy24();
        assert_eq!(shown.sunrise, easy::INVALID_TIME);
        assert_eq!(shown.maghrib, easy::INVALID_TIME);
        assert_ne!(shown.dhuhr, easy::INVALID_TIME);
        assert_eq!(easy::format_prayer_time(times.sunrise), easy::INVALID_TIME);
    }

    #[test]
    fn high_latitude_rule_keeps_order_in_summer() {
        let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        for rule in [
            HighLatitudeRule::MidNight,
            HighLatitudeRule::OneSeventh,
            HighLatitudeRule::AngleBased,
        ] {
            let times = PrayerTimes::new(CalculationMethod::Mwl, JuristicMethod::Shafii)
                .with_high_latitude_rule(rule)
                .calculate(london, date, offset(1));
            assert_ordered(&times);
        }
    }

    #[test]
    fn preferences_round_trip_through_json() {
        let prefs = PrayerTimes::new(CalculationMethod::Egypt, JuristicMethod::Hanafi)
            .with_high_latitude_rule(HighLatitudeRule::OneSeventh);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(
            json,
            r#"{"method":"egypt","asr_juristic":"hanafi","high_latitude_rule":"oneseventh","dhuhr_minutes":0.0}"#
        );
        let back: PrayerTimes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn stored_preferences_are_lenient() {
        let prefs: PrayerTimes = serde_json::from_str(r#"{"method":"retired-method"}"#).unwrap();
        assert_eq!(prefs, PrayerTimes::default());
        assert_eq!(prefs.method, CalculationMethod::Karachi);
    }
}
