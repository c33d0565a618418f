use crate::calendar::{self, day_key};
use crate::models::{AppData, DayStats, MonthStats, WeekStats, YearStats};
use chrono::NaiveDate;

/// Round-half-up completion percentage; 0 when nothing is scheduled.
pub fn percent_of(done: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        ((f64::from(done) / f64::from(total)) * 100.0).round() as u32
    }
}

/// One day's totals. `done` only counts positions valid against both the
/// record and the day's current task list, so stale record tails and short
/// records never skew the numbers.
pub fn day_stats(data: &AppData, date: NaiveDate) -> DayStats {
    let key = day_key(date);
    let config = data.task_config(&key);
    let record = data.records.get(&key);

    let mut total = 0u32;
    let mut done = 0u32;
    for (category, tasks) in &config {
        total += tasks.len() as u32;
        if let Some(flags) = record.and_then(|rec| rec.get(category)) {
            done += flags.iter().take(tasks.len()).filter(|flag| **flag).count() as u32;
        }
    }

    DayStats {
        date: key,
        percent: percent_of(done, total),
        total,
        done,
    }
}

/// Monday-through-Sunday totals for the week containing `date`.
pub fn week_stats(data: &AppData, date: NaiveDate) -> WeekStats {
    let days: Vec<DayStats> = calendar::week_dates(date)
        .into_iter()
        .map(|day| day_stats(data, day))
        .collect();

    let total: u32 = days.iter().map(|day| day.total).sum();
    let done: u32 = days.iter().map(|day| day.done).sum();
    let complete_days = days
        .iter()
        .filter(|day| day.total > 0 && day.percent == 100)
        .count() as u32;

    WeekStats {
        start_date: days[0].date.clone(),
        end_date: days[6].date.clone(),
        percent: percent_of(done, total),
        days,
        total,
        done,
        complete_days,
    }
}

/// Calendar-month totals. Only active days (total > 0) contribute.
pub fn month_stats(data: &AppData, date: NaiveDate) -> MonthStats {
    let mut active_days = 0u32;
    let mut total = 0u32;
    let mut done = 0u32;
    for day in calendar::month_days(date) {
        let stats = day_stats(data, day);
        if stats.total > 0 {
            active_days += 1;
            total += stats.total;
            done += stats.done;
        }
    }

    MonthStats {
        month: date.format("%Y-%m").to_string(),
        active_days,
        total,
        done,
        percent: percent_of(done, total),
    }
}

/// Twelve month summaries plus year totals. A perfect month is at least 90%
/// complete over at least 20 active days.
pub fn year_stats(data: &AppData, year: i32) -> YearStats {
    let months: Vec<MonthStats> = calendar::year_months(year)
        .into_iter()
        .map(|first| month_stats(data, first))
        .collect();

    let total: u32 = months.iter().map(|month| month.total).sum();
    let done: u32 = months.iter().map(|month| month.done).sum();
    let perfect_months = months
        .iter()
        .filter(|month| month.percent >= 90 && month.active_days >= 20)
        .count() as u32;

    YearStats {
        year,
        percent: percent_of(done, total),
        months,
        total,
        done,
        perfect_months,
    }
}
