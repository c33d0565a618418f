use crate::errors::AppError;
use crate::models::{AppData, History, TaskLists};
use crate::state::{AppState, SyncStatus};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;
use tracing::error;

pub const RECORDS_FILE: &str = "records.json";
pub const TASKS_FILE: &str = "daily_tasks.json";
pub const BADGES_FILE: &str = "badges.json";
pub const SYNC_CODE_FILE: &str = "sync_code";

/// Rapid toggling reschedules the pending save instead of stacking writes.
pub const SAVE_DEBOUNCE: Duration = Duration::from_secs(1);

const STATUS_ERROR_REVERT: Duration = Duration::from_secs(3);

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

pub struct LoadedData {
    pub data: AppData,
    pub load_error: bool,
}

/// The three blobs load independently: a missing file is normal, a broken one
/// degrades to empty and raises the load-error flag without failing the rest.
pub async fn load_data(dir: &Path) -> LoadedData {
    let mut load_error = false;
    let records: History = load_blob(&dir.join(RECORDS_FILE), &mut load_error).await;
    let daily_tasks: BTreeMap<String, TaskLists> =
        load_blob(&dir.join(TASKS_FILE), &mut load_error).await;
    let earned_badges: BTreeSet<String> = load_blob(&dir.join(BADGES_FILE), &mut load_error).await;

    LoadedData {
        data: AppData {
            records,
            daily_tasks,
            earned_badges,
        },
        load_error,
    }
}

async fn load_blob<T: DeserializeOwned + Default>(path: &Path, load_error: &mut bool) -> T {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                *load_error = true;
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            *load_error = true;
            T::default()
        }
    }
}

pub async fn persist_data(dir: &Path, data: &AppData) -> Result<(), AppError> {
    fs::create_dir_all(dir).await?;
    write_blob(&dir.join(RECORDS_FILE), &data.records).await?;
    write_blob(&dir.join(TASKS_FILE), &data.daily_tasks).await?;
    write_blob(&dir.join(BADGES_FILE), &data.earned_badges).await?;
    Ok(())
}

async fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Wipes the persisted blobs. The sync code file is rewritten separately by
/// the clear-all handler.
pub async fn clear_data(dir: &Path) -> Result<(), AppError> {
    for name in [RECORDS_FILE, TASKS_FILE, BADGES_FILE] {
        match fs::remove_file(dir.join(name)).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// A fresh 6-character uppercase base-36 code from v4 entropy.
pub fn generate_sync_code() -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut entropy = uuid::Uuid::new_v4().as_u128();
    let mut code = String::with_capacity(6);
    for _ in 0..6 {
        code.push(DIGITS[(entropy % 36) as usize] as char);
        entropy /= 36;
    }
    code
}

/// The installation's persisted sync code, created on first run.
pub async fn load_or_create_sync_code(dir: &Path) -> Result<String, AppError> {
    let path = dir.join(SYNC_CODE_FILE);
    if let Ok(text) = fs::read_to_string(&path).await {
        let code = text.trim().to_uppercase();
        if code.len() == 6 && code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(code);
        }
    }
    let code = generate_sync_code();
    write_sync_code(dir, &code).await?;
    Ok(code)
}

pub async fn write_sync_code(dir: &Path, code: &str) -> Result<(), AppError> {
    fs::create_dir_all(dir).await?;
    fs::write(dir.join(SYNC_CODE_FILE), code).await?;
    Ok(())
}

/// Background autosaver. Each dirty signal opens (or extends) a debounce
/// window; when the window closes a full snapshot is written. Saves are not
/// serialized against each other, which is fine because every write is the
/// whole snapshot. A failed write flashes the error status; the next
/// mutation triggers the next attempt.
pub async fn run_autosave(state: AppState, mut dirty: UnboundedReceiver<()>) {
    while dirty.recv().await.is_some() {
        loop {
            tokio::select! {
                _ = sleep(SAVE_DEBOUNCE) => break,
                signal = dirty.recv() => {
                    if signal.is_none() {
                        break;
                    }
                }
            }
        }

        let data = state.data.lock().await.clone();
        if let Err(err) = persist_data(&state.data_dir, &data).await {
            error!("autosave failed: {}", err.message);
            state
                .flash_status(SyncStatus::Error, STATUS_ERROR_REVERT)
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("daily_checkin_{tag}_{}_{nanos}", std::process::id()));
        path
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let dir = temp_dir("roundtrip");
        let mut data = AppData::default();
        data.toggle("2024-01-01", "Math", 1).unwrap();
        data.add_category("2024-01-02", "Piano").unwrap();
        data.earned_badges.insert("perfect_day".to_string());

        persist_data(&dir, &data).await.unwrap();
        let loaded = load_data(&dir).await;
        assert!(!loaded.load_error);
        assert_eq!(loaded.data, data);
    }

    #[tokio::test]
    async fn missing_files_load_as_empty_without_error() {
        let loaded = load_data(&temp_dir("missing")).await;
        assert!(!loaded.load_error);
        assert_eq!(loaded.data, AppData::default());
    }

    #[tokio::test]
    async fn one_broken_blob_does_not_take_down_the_rest() {
        let dir = temp_dir("broken");
        let mut data = AppData::default();
        data.toggle("2024-01-01", "Sports", 0).unwrap();
        persist_data(&dir, &data).await.unwrap();
        fs::write(dir.join(BADGES_FILE), b"{not json").await.unwrap();

        let loaded = load_data(&dir).await;
        assert!(loaded.load_error);
        assert!(loaded.data.earned_badges.is_empty());
        assert_eq!(loaded.data.records, data.records);
    }

    #[tokio::test]
    async fn sync_code_is_created_once_and_then_stable() {
        let dir = temp_dir("code");
        let first = load_or_create_sync_code(&dir).await.unwrap();
        assert_eq!(first.len(), 6);
        assert!(first.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let second = load_or_create_sync_code(&dir).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn garbage_sync_code_file_is_replaced() {
        let dir = temp_dir("badcode");
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(dir.join(SYNC_CODE_FILE), "too long to be a code")
            .await
            .unwrap();

        let code = load_or_create_sync_code(&dir).await.unwrap();
        assert_eq!(code.len(), 6);
    }

    #[tokio::test]
    async fn clear_data_removes_blobs() {
        let dir = temp_dir("clear");
        persist_data(&dir, &AppData::default()).await.unwrap();
        clear_data(&dir).await.unwrap();
        assert!(fs::metadata(dir.join(RECORDS_FILE)).await.is_err());
        // Clearing an already-empty dir is fine.
        clear_data(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn autosave_flushes_a_mutation_to_disk() {
        let dir = temp_dir("autosave");
        let (state, dirty_rx) = AppState::new(
            dir.clone(),
            PathBuf::from("unused"),
            AppData::default(),
            "ABC123".to_string(),
            false,
        );
        tokio::spawn(run_autosave(state.clone(), dirty_rx));

        state.data.lock().await.toggle("2024-01-01", "Math", 0).unwrap();
        state.mark_dirty();

        // The write lands once the debounce window closes.
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            let loaded = load_data(&dir).await;
            if loaded.data.records.contains_key("2024-01-01") {
                assert!(loaded.data.records["2024-01-01"]["Math"][0]);
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "autosave never flushed"
            );
            sleep(Duration::from_millis(100)).await;
        }
    }

    #[test]
    fn generated_codes_are_base36_uppercase() {
        for _ in 0..50 {
            let code = generate_sync_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}
