use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};

/// 세션 토큰 유효 기간 (시간)
/// Session token lifetime in hours, matching the cookie max-age
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// 사용자명
    /// Username
    pub username: String,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims expiring TOKEN_LIFETIME_HOURS after `issued_at`
    pub fn new(user_id: i64, username: String, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        let exp = (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp();

        Self {
            user_id,
            username,
            exp,
            iat,
        }
    }
}
