// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합하고 edge gate 적용
// Routes module: combines all domain routers behind the edge gate

use axum::{middleware, Router};
use crate::shared::middleware::gate::edge_gate;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::accounts::routes::create_accounts_router;
use crate::domains::bot::routes::create_bot_router;
use crate::domains::market::routes::{create_analysis_router, create_market_router};
use crate::domains::notifications::routes::create_notifications_router;
use crate::domains::dashboard::routes::create_dashboard_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .nest("/api/accounts", create_accounts_router())
        .nest("/api/bots", create_bot_router())
        .nest("/api/analysis", create_analysis_router())
        .nest("/api/market", create_market_router())
        .nest("/api/notifications", create_notifications_router())
        .merge(create_dashboard_router())
}

/// 상태가 주입되고 edge gate가 적용된 애플리케이션 라우터
/// Application router with state and the edge gate applied
pub fn create_app(app_state: AppState) -> Router {
    create_router()
        .layer(middleware::from_fn_with_state(app_state.clone(), edge_gate))
        .with_state(app_state)
}
