use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use crate::domains::market::models::MarketQuery;
use crate::shared::services::AppState;
use crate::shared::errors::TradingError;
use crate::shared::middleware::auth::AuthenticatedUser;

/// 종합 시장 분석
/// Comprehensive market analysis for a symbol
#[utoipa::path(
    get,
    path = "/api/analysis/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol", example = "BTC-USD")
    ),
    responses(
        (status = 200, description = "Analysis produced by the external engine"),
        (status = 400, description = "Invalid symbol"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Analysis failed")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Market"
)]
pub async fn get_analysis(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(symbol): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let analysis = app_state
        .market_service
        .analyze(&symbol)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(analysis))
}

/// 시세 데이터
/// Market data for a symbol
#[utoipa::path(
    get,
    path = "/api/market/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol", example = "BTC-USD"),
        MarketQuery
    ),
    responses(
        (status = 200, description = "Market data produced by the external engine"),
        (status = 400, description = "Invalid symbol, interval or range"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Market data fetch failed")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Market"
)]
pub async fn get_market_data(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(symbol): Path<String>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let data = app_state
        .market_service
        .market_data(&symbol, query)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(data))
}
