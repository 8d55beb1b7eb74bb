use axum::{routing::{get, post}, Router};
use crate::shared::services::AppState;
use crate::domains::bot::handlers::bot_handler;

/// Bot 라우터 생성
/// Create bot router
pub fn create_bot_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bot_handler::list_bots))
        .route("/configure", post(bot_handler::configure_bot))
        .route("/control", post(bot_handler::control_bot))
        .route("/simulate", post(bot_handler::simulate))
        .route("/simulations", get(bot_handler::list_simulations))
}
