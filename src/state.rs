use crate::models::AppData;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::{Mutex, mpsc};

/// User-visible sync lifecycle. `Saving` flips to `Synced` or `Error` and
/// both fall back to `Local` shortly after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Local,
    Saving,
    Synced,
    Error,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Local => "local",
            SyncStatus::Saving => "saving",
            SyncStatus::Synced => "synced",
            SyncStatus::Error => "error",
        }
    }
}

#[derive(Debug)]
struct StatusCell {
    status: SyncStatus,
    // Bumped on every change so a scheduled revert can tell whether it is
    // still current.
    generation: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub shared_store_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub sync_code: Arc<Mutex<String>>,
    pub load_error: bool,
    status: Arc<Mutex<StatusCell>>,
    dirty: mpsc::UnboundedSender<()>,
}

impl AppState {
    /// Builds the state and hands back the receiving end of the dirty
    /// channel for the autosave task.
    pub fn new(
        data_dir: PathBuf,
        shared_store_path: PathBuf,
        data: AppData,
        sync_code: String,
        load_error: bool,
    ) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (dirty, dirty_rx) = mpsc::unbounded_channel();
        let state = Self {
            data_dir,
            shared_store_path,
            data: Arc::new(Mutex::new(data)),
            sync_code: Arc::new(Mutex::new(sync_code)),
            load_error,
            status: Arc::new(Mutex::new(StatusCell {
                status: SyncStatus::Local,
                generation: 0,
            })),
            dirty,
        };
        (state, dirty_rx)
    }

    /// Nudges the autosaver. Sending only fails once it has shut down, at
    /// which point there is nothing left to notify.
    pub fn mark_dirty(&self) {
        let _ = self.dirty.send(());
    }

    pub async fn status(&self) -> SyncStatus {
        self.status.lock().await.status
    }

    pub async fn set_status(&self, status: SyncStatus) {
        let mut cell = self.status.lock().await;
        cell.generation += 1;
        cell.status = status;
    }

    /// Sets a status that reverts to `Local` after `revert_after`, unless a
    /// newer status change lands first.
    pub async fn flash_status(&self, status: SyncStatus, revert_after: Duration) {
        let generation = {
            let mut cell = self.status.lock().await;
            cell.generation += 1;
            cell.status = status;
            cell.generation
        };

        let cell = Arc::clone(&self.status);
        tokio::spawn(async move {
            tokio::time::sleep(revert_after).await;
            let mut cell = cell.lock().await;
            if cell.generation == generation {
                cell.status = SyncStatus::Local;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            PathBuf::from("unused"),
            PathBuf::from("unused"),
            AppData::default(),
            "ABC123".to_string(),
            false,
        )
        .0
    }

    #[tokio::test]
    async fn flash_status_reverts_to_local() {
        let state = test_state();
        state
            .flash_status(SyncStatus::Synced, Duration::from_millis(20))
            .await;
        assert_eq!(state.status().await, SyncStatus::Synced);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(state.status().await, SyncStatus::Local);
    }

    #[tokio::test]
    async fn newer_status_cancels_a_stale_revert() {
        let state = test_state();
        state
            .flash_status(SyncStatus::Synced, Duration::from_millis(20))
            .await;
        state.set_status(SyncStatus::Saving).await;

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(state.status().await, SyncStatus::Saving);
    }
}
