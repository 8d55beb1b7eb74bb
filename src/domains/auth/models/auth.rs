use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::user::{SessionUser, UserResponse};
use crate::domains::accounts::models::Account;

// 회원가입 요청 모델
// 필드 누락은 400으로 처리하기 위해 Option 사용
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Username (unique)
    /// 사용자명
    #[schema(example = "alice")]
    pub username: Option<String>,

    /// Email address (unique)
    /// 이메일 주소
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "pw123")]
    pub password: Option<String>,
}

// 회원가입 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = RegisterResponse)]
pub struct RegisterResponse {
    pub message: String,

    /// 새 사용자 ID
    #[serde(rename = "userId")]
    pub user_id: i64,
}

// 로그인 요청 모델
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,

    #[schema(example = "pw123")]
    pub password: Option<String>,
}

// 로그인 응답 모델
// 토큰은 본문이 아니라 auth-token 쿠키로 전달됨
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

/// 세션 조회 응답
/// Session introspection response
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SessionResponse)]
pub struct SessionResponse {
    pub authenticated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}

impl SessionResponse {
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
            accounts: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
