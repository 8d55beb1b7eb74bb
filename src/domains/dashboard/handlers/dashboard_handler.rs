use axum::{extract::State, http::StatusCode, Json};
use crate::domains::dashboard::models::DashboardOverview;
use crate::shared::services::AppState;
use crate::shared::errors::TradingError;
use crate::shared::middleware::auth::AuthenticatedUser;

/// 대시보드 페이지 데이터
/// Dashboard page data; without a session the gate redirects to /auth/login
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardOverview),
        (status = 307, description = "No valid session, redirect to /auth/login"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<DashboardOverview>, (StatusCode, Json<serde_json::Value>)> {
    let overview = app_state
        .dashboard_service
        .overview(authenticated_user.user_id)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(overview))
}
