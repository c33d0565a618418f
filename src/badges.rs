use crate::calendar;
use crate::models::{AppData, BadgeView};
use crate::stats;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct BadgeDef {
    pub id: &'static str,
    pub family: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub condition: &'static str,
    pub color: &'static str,
}

/// The full badge catalog. Six badges have evaluation rules; the rest are
/// catalog-only until product defines their conditions, so they render but
/// never get earned.
pub const CATALOG: &[BadgeDef] = &[
    BadgeDef {
        id: "perfect_day",
        family: "daily",
        name: "Perfect Day",
        icon: "🌟",
        condition: "Finish every task scheduled for a day",
        color: "#ffb549",
    },
    BadgeDef {
        id: "early_bird",
        family: "daily",
        name: "Early Bird",
        icon: "🌅",
        condition: "Finish a task before 7 in the morning",
        color: "#fca96e",
    },
    BadgeDef {
        id: "night_owl",
        family: "daily",
        name: "Night Owl",
        icon: "🌙",
        condition: "Finish a task after 10 at night",
        color: "#5f8ef7",
    },
    BadgeDef {
        id: "week_warrior",
        family: "weekly",
        name: "Week Warrior",
        icon: "🔥",
        condition: "Hit 100% on all seven days of a week",
        color: "#ff6b81",
    },
    BadgeDef {
        id: "study_master",
        family: "weekly",
        name: "Study Master",
        icon: "📚",
        condition: "Complete 50 tasks within one week",
        color: "#ae8afc",
    },
    BadgeDef {
        id: "consistency_5",
        family: "weekly",
        name: "Steady Five",
        icon: "📅",
        condition: "Check in five days in a row",
        color: "#22c993",
    },
    BadgeDef {
        id: "month_champion",
        family: "monthly",
        name: "Month Champion",
        icon: "🏆",
        condition: "Reach 90% completion over a month",
        color: "#ffd166",
    },
    BadgeDef {
        id: "perfect_month",
        family: "monthly",
        name: "Perfect Month",
        icon: "💎",
        condition: "Finish every task of every active day in a month",
        color: "#90e8fd",
    },
    BadgeDef {
        id: "hundred_days",
        family: "special",
        name: "Hundred Days",
        icon: "💯",
        condition: "Keep records on 100 different days",
        color: "#ec8ad9",
    },
    BadgeDef {
        id: "task_1000",
        family: "special",
        name: "Task Millennium",
        icon: "🚀",
        condition: "Complete 1000 tasks in total",
        color: "#2f4858",
    },
    BadgeDef {
        id: "super_learner",
        family: "special",
        name: "Super Learner",
        icon: "🧠",
        condition: "Master every subject at once",
        color: "#24bb5f",
    },
    BadgeDef {
        id: "all_rounder",
        family: "special",
        name: "All-Rounder",
        icon: "🌈",
        condition: "Earn a badge from every family",
        color: "#fcb6ef",
    },
];

/// Badge ids satisfied by the current data, with `reference` anchoring the
/// day/week/month rules. The caller unions the result into the earned set;
/// nothing here ever removes an earned badge.
pub fn evaluate(data: &AppData, reference: NaiveDate) -> BTreeSet<String> {
    let mut earned = BTreeSet::new();

    let day = stats::day_stats(data, reference);
    if day.total > 0 && day.percent == 100 {
        earned.insert("perfect_day".to_string());
    }

    let week: Vec<_> = calendar::week_dates(reference)
        .into_iter()
        .map(|date| stats::day_stats(data, date))
        .collect();
    if week.iter().all(|day| day.total > 0 && day.percent == 100) {
        earned.insert("week_warrior".to_string());
    }
    if week.iter().map(|day| day.done).sum::<u32>() >= 50 {
        earned.insert("study_master".to_string());
    }

    if stats::month_stats(data, reference).percent >= 90 {
        earned.insert("month_champion".to_string());
    }

    if data.records.len() >= 100 {
        earned.insert("hundred_days".to_string());
    }

    // Raw count over everything ever stored, stale entries included.
    let lifetime_done = data
        .records
        .values()
        .flat_map(|record| record.values())
        .flatten()
        .filter(|flag| **flag)
        .count();
    if lifetime_done >= 1000 {
        earned.insert("task_1000".to_string());
    }

    earned
}

/// Evaluates and merges into the earned set. Runs after every mutation.
pub fn refresh(data: &mut AppData, reference: NaiveDate) {
    let earned = evaluate(data, reference);
    data.earned_badges.extend(earned);
}

pub fn catalog_view(earned: &BTreeSet<String>) -> Vec<BadgeView> {
    CATALOG
        .iter()
        .map(|def| BadgeView {
            id: def.id,
            family: def.family,
            name: def.name,
            icon: def.icon,
            condition: def.condition,
            color: def.color,
            earned: earned.contains(def.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(key: &str) -> NaiveDate {
        calendar::parse_day(key).unwrap()
    }

    fn complete_day(data: &mut AppData, day: &str) {
        for (category, tasks) in data.task_config(day) {
            for index in 0..tasks.len() {
                data.toggle(day, &category, index).unwrap();
            }
        }
    }

    #[test]
    fn perfect_day_needs_a_nonempty_config() {
        let mut data = AppData::default();
        data.daily_tasks
            .insert("2024-01-01".to_string(), Default::default());
        assert!(!evaluate(&data, date("2024-01-01")).contains("perfect_day"));

        let mut data = AppData::default();
        complete_day(&mut data, "2024-01-01");
        assert!(evaluate(&data, date("2024-01-01")).contains("perfect_day"));
    }

    #[test]
    fn full_week_earns_week_warrior() {
        let mut data = AppData::default();
        let monday = date("2024-01-01");
        for offset in 0..7 {
            complete_day(&mut data, &calendar::day_key(monday + Duration::days(offset)));
        }

        let earned = evaluate(&data, date("2024-01-03"));
        assert!(earned.contains("week_warrior"));
        // 63 tasks done that week.
        assert!(earned.contains("study_master"));
    }

    #[test]
    fn six_complete_days_is_not_week_warrior() {
        let mut data = AppData::default();
        let monday = date("2024-01-01");
        for offset in 0..6 {
            complete_day(&mut data, &calendar::day_key(monday + Duration::days(offset)));
        }

        let earned = evaluate(&data, monday);
        assert!(!earned.contains("week_warrior"));
        // 54 done still clears the study_master bar.
        assert!(earned.contains("study_master"));
    }

    #[test]
    fn hundred_distinct_days_earns_hundred_days() {
        let mut data = AppData::default();
        let start = date("2024-01-01");
        for offset in 0..100 {
            let day = calendar::day_key(start + Duration::days(offset));
            data.toggle(&day, "Sports", 0).unwrap();
        }

        let earned = evaluate(&data, start);
        assert!(earned.contains("hundred_days"));
    }

    #[test]
    fn lifetime_completions_earn_task_1000() {
        let mut data = AppData::default();
        data.records
            .entry("2020-05-05".to_string())
            .or_default()
            .insert("Chinese".to_string(), vec![true; 1000]);

        assert!(evaluate(&data, date("2024-01-01")).contains("task_1000"));
    }

    #[test]
    fn earned_badges_survive_later_mutations() {
        let mut data = AppData::default();
        complete_day(&mut data, "2024-01-01");
        refresh(&mut data, date("2024-01-01"));
        assert!(data.earned_badges.contains("perfect_day"));

        // Undo the whole day; the badge must stay.
        complete_day(&mut data, "2024-01-01");
        refresh(&mut data, date("2024-01-01"));
        assert!(data.earned_badges.contains("perfect_day"));
    }

    #[test]
    fn placeholder_badges_are_never_earned() {
        let mut data = AppData::default();
        let start = date("2024-01-01");
        for offset in 0..150 {
            complete_day(&mut data, &calendar::day_key(start + Duration::days(offset)));
        }

        let earned = evaluate(&data, start);
        for id in ["early_bird", "night_owl", "consistency_5", "perfect_month", "super_learner", "all_rounder"] {
            assert!(!earned.contains(id), "{id} has no evaluation rule");
        }
    }

    #[test]
    fn catalog_view_flags_earned_entries() {
        let mut earned = BTreeSet::new();
        earned.insert("perfect_day".to_string());

        let view = catalog_view(&earned);
        assert_eq!(view.len(), CATALOG.len());
        assert!(view.iter().find(|b| b.id == "perfect_day").unwrap().earned);
        assert!(!view.iter().find(|b| b.id == "week_warrior").unwrap().earned);
    }
}
