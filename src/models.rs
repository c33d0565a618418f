use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Category name -> completion booleans. Position `i` refers to task `i` of
/// that day's task list for the category; entries past the current task count
/// are stale but kept in storage.
pub type DayRecord = BTreeMap<String, Vec<bool>>;

/// Day key (`YYYY-MM-DD`) -> that day's completion record.
pub type History = BTreeMap<String, DayRecord>;

/// Category name -> ordered task names. Order defines record positions.
pub type TaskLists = BTreeMap<String, Vec<String>>;

/// All mutable application state. Days without an entry in `daily_tasks`
/// fall back to the default task catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppData {
    pub records: History,
    pub daily_tasks: BTreeMap<String, TaskLists>,
    pub earned_badges: BTreeSet<String>,
}

/// The unit of sync export/import. Field names are the shared-store wire
/// format; every field is optional on the wire so a sparse record still
/// adopts with defaults (malformed detection happens before conversion).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub records: History,
    pub daily_tasks: BTreeMap<String, TaskLists>,
    pub earned_badges: BTreeSet<String>,
    pub last_update: i64,
    pub sync_code: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
    pub category: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct TaskAddRequest {
    pub date: String,
    pub category: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskDeleteRequest {
    pub date: String,
    pub category: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct CategoryAddRequest {
    pub date: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDeleteRequest {
    pub date: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct AdoptRequest {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub date: String,
    pub total: u32,
    pub done: u32,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub tasks: Vec<String>,
    pub checked: Vec<bool>,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: String,
    pub categories: Vec<CategoryView>,
    pub stats: DayStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekStats {
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DayStats>,
    pub total: u32,
    pub done: u32,
    pub percent: u32,
    pub complete_days: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthStats {
    pub month: String,
    pub active_days: u32,
    pub total: u32,
    pub done: u32,
    pub percent: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YearStats {
    pub year: i32,
    pub months: Vec<MonthStats>,
    pub total: u32,
    pub done: u32,
    pub percent: u32,
    pub perfect_months: u32,
}

#[derive(Debug, Serialize)]
pub struct BadgeView {
    pub id: &'static str,
    pub family: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub condition: &'static str,
    pub color: &'static str,
    pub earned: bool,
}

#[derive(Debug, Serialize)]
pub struct SyncInfo {
    pub code: String,
    pub status: String,
    pub load_error: bool,
}

#[derive(Debug, Serialize)]
pub struct AdoptResponse {
    pub code: String,
    pub days: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub code: String,
}
