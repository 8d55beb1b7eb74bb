// src/domains/auth/services/jwt_service.rs
use crate::shared::errors::AuthError;
use crate::domains::auth::models::jwt::Claims;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// JWT 서비스
/// JWT Service for session token issuance and verification
///
/// 무상태 세션: 서버에 저장하지 않으며 폐기(revocation) 수단이 없음.
/// 발급된 토큰은 비밀번호 변경 후에도 만료 시까지 유효함.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service from the process-wide signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 세션 토큰 발급 (24시간)
    /// Issue a session token valid for 24 hours
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// 발급 시각을 지정하여 토큰 발급
    /// Issue a token as if at `now`
    pub fn issue_at(&self, user_id: i64, username: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, username.to_string(), now);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// 토큰 검증
    /// Verify a session token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// 지정한 시각 기준으로 토큰 검증
    ///
    /// 서명/형식 오류는 InvalidToken, `now >= exp`이면 ExpiredToken.
    /// 만료 판정은 leeway 없이 직접 수행함.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(token_data.claims)
    }
}
