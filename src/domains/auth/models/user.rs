use serde::Serialize;
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 사용자 (DB row)
/// User row, including the password hash
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// 사용자 응답 (비밀번호 제외)
/// User response (without password)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// 로그인 응답에 포함되는 최소 사용자 정보
/// Minimal identity returned by login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}
