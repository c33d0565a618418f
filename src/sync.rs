use crate::errors::AppError;
use crate::models::{AppData, Snapshot};
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_shared_store_path() -> PathBuf {
    env::var("SHARED_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/shared_store.json"))
}

/// Codes are case-insensitive at the boundary; the store only ever sees
/// uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn make_snapshot(data: &AppData, code: &str) -> Snapshot {
    Snapshot {
        records: data.records.clone(),
        daily_tasks: data.daily_tasks.clone(),
        earned_badges: data.earned_badges.clone(),
        last_update: Utc::now().timestamp_millis(),
        sync_code: code.to_string(),
    }
}

/// Wholesale replacement; sync is last-write-wins, never a merge.
pub fn apply_snapshot(data: &mut AppData, snapshot: &Snapshot) {
    data.records = snapshot.records.clone();
    data.daily_tasks = snapshot.daily_tasks.clone();
    data.earned_badges = snapshot.earned_badges.clone();
}

/// The shared store is one JSON object mapping code -> snapshot. Records are
/// kept as raw values until fetch so one bad entry cannot poison lookups of
/// the others.
async fn read_table(path: &Path) -> Result<BTreeMap<String, Value>, AppError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("shared store at {} is unreadable: {err}", path.display());
            AppError::internal(err)
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(err) => Err(err.into()),
    }
}

/// Upserts the snapshot under its code, creating the store on first use.
pub async fn publish(path: &Path, code: &str, snapshot: &Snapshot) -> Result<(), AppError> {
    let mut table = read_table(path).await?;
    table.insert(
        normalize_code(code),
        serde_json::to_value(snapshot).map_err(AppError::internal)?,
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(&table).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Looks up a snapshot by code. A record carrying neither `records` nor
/// `dailyTasks` is rejected as malformed; a sparse record with either key
/// adopts with defaults for the rest.
pub async fn fetch(path: &Path, code: &str) -> Result<Snapshot, AppError> {
    let table = read_table(path).await?;
    let code = normalize_code(code);
    let Some(value) = table.get(&code) else {
        return Err(AppError::not_found(format!("sync code '{code}' not found")));
    };

    if value.get("records").is_none() && value.get("dailyTasks").is_none() {
        return Err(AppError::bad_request(format!(
            "snapshot for '{code}' is malformed"
        )));
    }
    serde_json::from_value(value.clone())
        .map_err(|_| AppError::bad_request(format!("snapshot for '{code}' is malformed")))
}
