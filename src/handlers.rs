use crate::badges;
use crate::calendar::{self, day_key};
use crate::errors::AppError;
use crate::models::{
    AdoptRequest, AppData, CategoryAddRequest, CategoryDeleteRequest, CategoryView, ClearResponse,
    DayView, MonthStats, SyncInfo, TaskAddRequest, TaskDeleteRequest, ToggleRequest, WeekStats,
    YearStats,
};
use crate::state::{AppState, SyncStatus};
use crate::stats;
use crate::storage;
use crate::sync;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::NaiveDate;
use std::time::Duration;

const SYNCED_REVERT: Duration = Duration::from_secs(2);
const ERROR_REVERT: Duration = Duration::from_secs(3);

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    calendar::parse_day(raw)
        .ok_or_else(|| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

/// The read model for one day: every category in effect with its task names
/// and reconciled checkbox states (missing entries read as unchecked, stale
/// tail entries are not shown).
fn build_day_view(data: &AppData, date: NaiveDate) -> DayView {
    let key = day_key(date);
    let config = data.task_config(&key);
    let record = data.records.get(&key);

    let categories = config
        .iter()
        .map(|(name, tasks)| {
            let flags = record.and_then(|rec| rec.get(name));
            let checked = (0..tasks.len())
                .map(|index| flags.and_then(|f| f.get(index)).copied().unwrap_or(false))
                .collect();
            CategoryView {
                name: name.clone(),
                tasks: tasks.clone(),
                checked,
            }
        })
        .collect();

    DayView {
        date: key,
        categories,
        stats: stats::day_stats(data, date),
    }
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(build_day_view(&data, date)))
}

/// Applies one mutation, re-evaluates badges with the mutated day as the
/// reference, and nudges the debounced autosaver.
async fn mutate(
    state: &AppState,
    date: NaiveDate,
    op: impl FnOnce(&mut AppData, &str) -> Result<(), AppError>,
) -> Result<Json<DayView>, AppError> {
    let key = day_key(date);
    let mut data = state.data.lock().await;
    op(&mut data, &key)?;
    badges::refresh(&mut data, date);
    let view = build_day_view(&data, date);
    drop(data);

    state.mark_dirty();
    Ok(Json(view))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&req.date)?;
    mutate(&state, date, |data, key| {
        data.toggle(key, &req.category, req.index)
    })
    .await
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(req): Json<TaskAddRequest>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&req.date)?;
    mutate(&state, date, |data, key| {
        data.add_task(key, &req.category, &req.name)
    })
    .await
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<TaskDeleteRequest>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&req.date)?;
    mutate(&state, date, |data, key| {
        data.delete_task(key, &req.category, req.index)
    })
    .await
}

pub async fn add_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryAddRequest>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&req.date)?;
    mutate(&state, date, |data, key| data.add_category(key, &req.name)).await
}

pub async fn delete_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryDeleteRequest>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&req.date)?;
    mutate(&state, date, |data, key| {
        data.delete_category(key, &req.category)
    })
    .await
}

pub async fn get_week(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<WeekStats>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(stats::week_stats(&data, date)))
}

pub async fn get_month(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<MonthStats>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(stats::month_stats(&data, date)))
}

pub async fn get_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<YearStats>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(stats::year_stats(&data, year)))
}

pub async fn get_badges(
    State(state): State<AppState>,
) -> Json<Vec<crate::models::BadgeView>> {
    let data = state.data.lock().await;
    Json(badges::catalog_view(&data.earned_badges))
}

pub async fn sync_info(State(state): State<AppState>) -> Json<SyncInfo> {
    let code = state.sync_code.lock().await.clone();
    Json(SyncInfo {
        code,
        status: state.status().await.as_str().to_string(),
        load_error: state.load_error,
    })
}

pub async fn sync_publish(State(state): State<AppState>) -> Result<Json<SyncInfo>, AppError> {
    state.set_status(SyncStatus::Saving).await;

    let code = state.sync_code.lock().await.clone();
    let snapshot = {
        let data = state.data.lock().await;
        sync::make_snapshot(&data, &code)
    };

    match sync::publish(&state.shared_store_path, &code, &snapshot).await {
        Ok(()) => {
            state.flash_status(SyncStatus::Synced, SYNCED_REVERT).await;
            Ok(Json(SyncInfo {
                code,
                status: SyncStatus::Synced.as_str().to_string(),
                load_error: state.load_error,
            }))
        }
        Err(err) => {
            state.flash_status(SyncStatus::Error, ERROR_REVERT).await;
            Err(err)
        }
    }
}

/// Directional adoption: fetch by code, replace local state wholesale, and
/// take over the fetched code so later publishes land on the same key. Any
/// fetch failure leaves local state untouched.
pub async fn sync_adopt(
    State(state): State<AppState>,
    Json(req): Json<AdoptRequest>,
) -> Result<Json<crate::models::AdoptResponse>, AppError> {
    let code = sync::normalize_code(&req.code);
    if code.is_empty() {
        return Err(AppError::bad_request("sync code must not be empty"));
    }

    let snapshot = sync::fetch(&state.shared_store_path, &code).await?;

    let days = {
        let mut data = state.data.lock().await;
        sync::apply_snapshot(&mut data, &snapshot);
        storage::persist_data(&state.data_dir, &data).await?;
        data.records.len()
    };
    storage::write_sync_code(&state.data_dir, &code).await?;
    *state.sync_code.lock().await = code.clone();

    Ok(Json(crate::models::AdoptResponse { code, days }))
}

pub async fn clear_all(State(state): State<AppState>) -> Result<Json<ClearResponse>, AppError> {
    {
        let mut data = state.data.lock().await;
        data.clear();
        storage::clear_data(&state.data_dir).await?;
    }

    let code = storage::generate_sync_code();
    storage::write_sync_code(&state.data_dir, &code).await?;
    *state.sync_code.lock().await = code.clone();

    Ok(Json(ClearResponse { code }))
}
