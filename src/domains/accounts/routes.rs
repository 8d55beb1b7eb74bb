// Accounts domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::accounts::handlers::account_handler;
use crate::shared::services::AppState;

/// Create accounts router
/// 계정 라우터 생성
pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(account_handler::list_accounts))
        .route("/demo", post(account_handler::create_demo_account))
        .route("/real", post(account_handler::create_real_account))
}
