use crate::domains::auth::models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    SessionResponse, SessionUser,
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    Json,
};
use crate::shared::middleware::auth::AuthenticatedUser;

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Missing username, email or password"),
        (status = 409, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let user_id = app_state
        .auth_state
        .auth_service
        .register(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

// 로그인 핸들러
// 토큰은 본문 대신 HttpOnly 쿠키로 전달
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful (sets auth-token cookie)", body = LoginResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid username or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<([(header::HeaderName, HeaderValue); 1], Json<LoginResponse>), (StatusCode, Json<serde_json::Value>)> {
    let auth_state = &app_state.auth_state;

    // Service 호출 (비즈니스 로직 + 토큰 발급)
    let (user, token) = auth_state
        .auth_service
        .login(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let cookie = auth_state
        .session_cookie
        .set(&token)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user: SessionUser {
                id: user.id,
                username: user.username,
            },
        }),
    ))
}

/// 로그아웃 핸들러
/// Logout handler: always clears the session cookie
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
) -> ([(header::HeaderName, HeaderValue); 1], Json<MessageResponse>) {
    (
        [(header::SET_COOKIE, app_state.auth_state.session_cookie.clear())],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

/// 세션 조회 핸들러
/// Session introspection: re-fetches the user and accounts behind the cookie
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Authenticated session", body = SessionResponse),
        (status = 401, description = "No valid session", body = SessionResponse),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("CookieAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn session(
    State(app_state): State<AppState>,
    authenticated_user: Option<AuthenticatedUser>,
) -> Result<(StatusCode, Json<SessionResponse>), (StatusCode, Json<serde_json::Value>)> {
    let Some(authenticated_user) = authenticated_user else {
        return Ok((StatusCode::UNAUTHORIZED, Json(SessionResponse::unauthenticated())));
    };

    let session = app_state
        .auth_state
        .auth_service
        .load_session(authenticated_user.user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    match session {
        Some((user, accounts)) => Ok((
            StatusCode::OK,
            Json(SessionResponse {
                authenticated: true,
                user: Some(user.into()),
                accounts: Some(accounts),
            }),
        )),
        // 토큰은 유효하지만 사용자가 삭제됨
        None => Ok((StatusCode::UNAUTHORIZED, Json(SessionResponse::unauthenticated()))),
    }
}
