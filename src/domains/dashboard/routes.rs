// Dashboard routes (gated page paths, not under /api)
use axum::{routing::get, Router};
use crate::domains::dashboard::handlers::dashboard_handler;
use crate::shared::services::AppState;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_handler::get_dashboard))
}
