use axum::{extract::State, http::StatusCode, Json};
use crate::domains::bot::models::{
    BotAction, BotsResponse, ConfigureBotRequest, ConfigureBotResponse, ControlBotRequest, ControlBotResponse,
    SimulateRequest, SimulateResponse, SimulationsResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::TradingError;
use crate::shared::middleware::auth::AuthenticatedUser;

/// 봇 설정 목록
/// List bot configurations across the caller's accounts
#[utoipa::path(
    get,
    path = "/api/bots",
    responses(
        (status = 200, description = "Bots retrieved successfully", body = BotsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Bots"
)]
pub async fn list_bots(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<BotsResponse>, (StatusCode, Json<serde_json::Value>)> {
    let bots = app_state
        .bot_service
        .list_bots(authenticated_user.user_id)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(BotsResponse { bots }))
}

/// 봇 설정 저장
/// Save a bot configuration
/// 
/// 같은 계정 + 거래쌍의 설정이 있으면 갱신, 없으면 정지 상태로 생성합니다.
/// 
/// # Errors
/// - 필수 필드 누락 (400)
/// - 소유하지 않은 계정 (403)
#[utoipa::path(
    post,
    path = "/api/bots/configure",
    request_body = ConfigureBotRequest,
    responses(
        (status = 200, description = "Bot configuration saved", body = ConfigureBotResponse),
        (status = 400, description = "Missing accountId, tradingPair or botType"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Account not owned by caller"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Bots"
)]
pub async fn configure_bot(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<ConfigureBotRequest>,
) -> Result<Json<ConfigureBotResponse>, (StatusCode, Json<serde_json::Value>)> {
    let bot_id = app_state
        .bot_service
        .configure(authenticated_user.user_id, request)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ConfigureBotResponse {
        message: "Bot configuration saved successfully".to_string(),
        bot_id,
    }))
}

/// 봇 시작/정지
/// Start or stop a bot
#[utoipa::path(
    post,
    path = "/api/bots/control",
    request_body = ControlBotRequest,
    responses(
        (status = 200, description = "Bot status changed", body = ControlBotResponse),
        (status = 400, description = "Missing botId or invalid action"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Bot not owned by caller"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Bots"
)]
pub async fn control_bot(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<ControlBotRequest>,
) -> Result<Json<ControlBotResponse>, (StatusCode, Json<serde_json::Value>)> {
    let action = app_state
        .bot_service
        .control(authenticated_user.user_id, request)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let message = match action {
        BotAction::Start => "Bot started successfully",
        BotAction::Stop => "Bot stopped successfully",
    };

    Ok(Json(ControlBotResponse {
        message: message.to_string(),
        status: action.status().to_string(),
    }))
}

/// 전략 시뮬레이션
/// Run a strategy simulation through the external engine
#[utoipa::path(
    post,
    path = "/api/bots/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Simulation completed", body = SimulateResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Account not owned by caller"),
        (status = 404, description = "No bot configuration for this account and pair"),
        (status = 500, description = "Simulation failed")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Bots"
)]
pub async fn simulate(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let results = app_state
        .bot_service
        .simulate(authenticated_user.user_id, request)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(SimulateResponse {
        message: "Simulation completed successfully".to_string(),
        results,
    }))
}

/// 최근 시뮬레이션 기록
#[utoipa::path(
    get,
    path = "/api/bots/simulations",
    responses(
        (status = 200, description = "Recent simulations", body = SimulationsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Bots"
)]
pub async fn list_simulations(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<SimulationsResponse>, (StatusCode, Json<serde_json::Value>)> {
    let simulations = app_state
        .bot_service
        .list_simulations(authenticated_user.user_id)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(SimulationsResponse { simulations }))
}
