use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 필수 입력값 누락
    /// Missing or invalid input
    #[error("{0}")]
    Validation(String),

    /// 사용자명 또는 이메일이 이미 존재함
    /// Username or email already registered
    #[error("Username or email is already in use")]
    DuplicateUser,

    /// 잘못된 사용자명 또는 비밀번호
    /// Same message for unknown user and wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 비밀번호 검증 실패 (저장된 해시가 손상됨)
    /// Stored hash could not be parsed
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),

    /// 서명 불일치 또는 형식 오류
    /// Signature mismatch or malformed token
    #[error("Invalid token")]
    InvalidToken,

    /// 만료된 토큰
    /// Token past its expiry
    #[error("Token expired")]
    ExpiredToken,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Token not provided")]
    MissingToken,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateUser => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
/// 500 계열은 내부 정보를 숨기고 로그에만 남김
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %err, "auth request failed");
            "An internal error occurred, please try again later".to_string()
        } else {
            err.to_string()
        };

        (status, Json(json!({ "message": message })))
    }
}
