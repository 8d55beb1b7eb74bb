// Notifications domain routes
use axum::{routing::get, Router};
use crate::domains::notifications::handlers::notification_handler;
use crate::shared::services::AppState;

pub fn create_notifications_router() -> Router<AppState> {
    Router::new().route("/", get(notification_handler::list_notifications))
}
