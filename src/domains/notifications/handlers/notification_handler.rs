use axum::{extract::State, http::StatusCode, Json};
use crate::domains::notifications::models::NotificationsResponse;
use crate::shared::services::AppState;
use crate::shared::errors::TradingError;
use crate::shared::middleware::auth::AuthenticatedUser;

/// 최근 알림 조회
/// Latest notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Latest 50 notifications", body = NotificationsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<NotificationsResponse>, (StatusCode, Json<serde_json::Value>)> {
    let notifications = app_state
        .notification_service
        .list_recent(authenticated_user.user_id)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(NotificationsResponse { notifications }))
}
