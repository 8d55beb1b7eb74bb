use crate::domains::accounts::models::{
    AccountsResponse, CreateAccountResponse, CreateDemoAccountRequest, CreateRealAccountRequest,
};
use crate::shared::services::AppState;
use crate::shared::errors::TradingError;
use crate::shared::middleware::auth::AuthenticatedUser;
use axum::{extract::State, http::StatusCode, Json};

/// 내 계정 목록
/// List the caller's accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = AccountsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Accounts"
)]
pub async fn list_accounts(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<AccountsResponse>, (StatusCode, Json<serde_json::Value>)> {
    let accounts = app_state
        .account_service
        .list_accounts(authenticated_user.user_id)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(AccountsResponse { accounts }))
}

/// 데모 계정 생성
/// Create a demo account with virtual capital
#[utoipa::path(
    post,
    path = "/api/accounts/demo",
    request_body = CreateDemoAccountRequest,
    responses(
        (status = 201, description = "Demo account created successfully", body = CreateAccountResponse),
        (status = 400, description = "Initial capital missing or not positive"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Accounts"
)]
pub async fn create_demo_account(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateDemoAccountRequest>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), (StatusCode, Json<serde_json::Value>)> {
    let account_id = app_state
        .account_service
        .create_demo_account(authenticated_user.user_id, request)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse {
            message: "Demo account created successfully".to_string(),
            account_id,
        }),
    ))
}

/// 실계정 생성 (거래소 API 키 등록)
/// Create an exchange-linked account
#[utoipa::path(
    post,
    path = "/api/accounts/real",
    request_body = CreateRealAccountRequest,
    responses(
        (status = 201, description = "Real account created successfully", body = CreateAccountResponse),
        (status = 400, description = "Missing exchange, API key or API secret"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Accounts"
)]
pub async fn create_real_account(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateRealAccountRequest>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), (StatusCode, Json<serde_json::Value>)> {
    let account_id = app_state
        .account_service
        .create_real_account(authenticated_user.user_id, request)
        .await
        .map_err(|e: TradingError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse {
            message: "Real account created successfully".to_string(),
            account_id,
        }),
    ))
}
