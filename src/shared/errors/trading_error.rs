use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::clients::RunnerError;

/// 계정/봇/시장/알림 도메인 에러
/// Errors for the accounts, bots, market and notifications domains
#[derive(Error, Debug)]
pub enum TradingError {
    /// 필수 입력값 누락 또는 잘못된 값
    #[error("{0}")]
    Validation(String),

    /// 세션 없음
    #[error("Unauthorized")]
    Unauthenticated,

    /// 소유하지 않은 리소스
    /// Authenticated but not the owner
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 스크립트 실패
    /// External analysis/simulation runner failure
    #[error("Runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl TradingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TradingError::Validation(_) => StatusCode::BAD_REQUEST,
            TradingError::Unauthenticated => StatusCode::UNAUTHORIZED,
            TradingError::Forbidden(_) => StatusCode::FORBIDDEN,
            TradingError::NotFound(_) => StatusCode::NOT_FOUND,
            TradingError::DatabaseError(_)
            | TradingError::Runner(_)
            | TradingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TradingError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TradingError) -> Self {
        let status = err.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %err, "trading request failed");
            "An internal error occurred, please try again later".to_string()
        } else {
            err.to_string()
        };

        (status, Json(json!({ "message": message })))
    }
}
