use daily_checkin::state::AppState;
use daily_checkin::{router, storage, sync};
use std::{env, net::SocketAddr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = storage::resolve_data_dir();
    tokio::fs::create_dir_all(&data_dir).await?;
    let shared_store_path = sync::resolve_shared_store_path();

    let loaded = storage::load_data(&data_dir).await;
    if loaded.load_error {
        warn!("some saved data could not be read; continuing with what loaded");
    }
    let sync_code = storage::load_or_create_sync_code(&data_dir)
        .await
        .map_err(|err| err.message)?;
    info!("sync code {sync_code}");

    let (state, dirty_rx) = AppState::new(
        data_dir,
        shared_store_path,
        loaded.data,
        sync_code,
        loaded.load_error,
    );
    tokio::spawn(storage::run_autosave(state.clone(), dirty_rx));

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
