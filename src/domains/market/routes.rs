// Market domain routes
use axum::{routing::get, Router};
use crate::domains::market::handlers::market_handler;
use crate::shared::services::AppState;

/// 분석 라우터 (/api/analysis)
pub fn create_analysis_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(market_handler::get_analysis))
}

/// 시세 라우터 (/api/market)
pub fn create_market_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(market_handler::get_market_data))
}
