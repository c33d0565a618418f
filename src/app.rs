use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/task/add", post(handlers::add_task))
        .route("/api/task/delete", post(handlers::delete_task))
        .route("/api/category/add", post(handlers::add_category))
        .route("/api/category/delete", post(handlers::delete_category))
        .route("/api/stats/week/:date", get(handlers::get_week))
        .route("/api/stats/month/:date", get(handlers::get_month))
        .route("/api/stats/year/:year", get(handlers::get_year))
        .route("/api/badges", get(handlers::get_badges))
        .route("/api/sync", get(handlers::sync_info))
        .route("/api/sync/publish", post(handlers::sync_publish))
        .route("/api/sync/adopt", post(handlers::sync_adopt))
        .route("/api/clear", post(handlers::clear_all))
        .with_state(state)
}
