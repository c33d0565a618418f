use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in the server's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The canonical `YYYY-MM-DD` key used for records and configs.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Strict parse of a `YYYY-MM-DD` key.
pub fn parse_day(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The Monday on or before `date`. Weeks always run Monday through Sunday;
/// chrono already numbers Sunday as 6 days from Monday, which matches the
/// original Sunday=7 remap.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven days of the week containing `date`, Monday first.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let monday = week_start(date);
    (0..7).map(|offset| monday + Duration::days(offset)).collect()
}

/// First day of the month containing `date`.
pub fn month_first(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Every calendar day of the month containing `date`. Stops at the calendar
/// limit, so the last representable month does not overflow past
/// `NaiveDate::MAX`.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = month_first(date);
    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day.month() == first.month() {
        days.push(day);
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    days
}

/// The first day of each month of `year`, or an empty list for a year
/// chrono cannot represent.
pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_of_a_sunday_starts_on_the_previous_monday() {
        // 2024-01-07 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let dates = week_dates(sunday);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dates[6], sunday);
    }

    #[test]
    fn week_start_is_identity_on_a_monday() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn month_days_handles_leap_february() {
        let days = month_days(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(days.len(), 29);
        assert_eq!(day_key(days[0]), "2024-02-01");
        assert_eq!(day_key(days[28]), "2024-02-29");
    }

    #[test]
    fn month_days_stops_at_the_calendar_limit() {
        let days = month_days(NaiveDate::MAX);
        assert_eq!(days.last(), Some(&NaiveDate::MAX));
        assert_eq!(days[0], month_first(NaiveDate::MAX));
    }

    #[test]
    fn year_months_lists_twelve_firsts() {
        let months = year_months(2024);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| m.day() == 1));
        assert_eq!(months[11].month(), 12);
    }

    #[test]
    fn parse_day_rejects_garbage() {
        assert!(parse_day("2024-01-05").is_some());
        assert!(parse_day("not-a-date").is_none());
        assert!(parse_day("2024-13-01").is_none());
    }
}
