use axum::http::{header, HeaderMap, HeaderValue};
use crate::domains::auth::models::jwt::TOKEN_LIFETIME_HOURS;
use crate::shared::errors::AuthError;

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// 세션 쿠키 어댑터
/// Session Cookie Adapter
///
/// HttpOnly, SameSite=Strict, Path=/ 쿠키로 토큰을 전달.
/// production 모드에서만 Secure 속성을 붙임.
/// 쿠키 변경은 해당 응답에서만 클라이언트에 반영됨.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// 토큰을 담은 Set-Cookie 값 (max-age = 토큰 만료와 동일한 24시간)
    /// Set-Cookie value carrying the token
    pub fn set(&self, token: &str) -> Result<HeaderValue, AuthError> {
        self.build(token, TOKEN_LIFETIME_HOURS * 3600)
    }

    /// 빈 값 + Max-Age=0 으로 즉시 만료
    /// Set-Cookie value that expires the session immediately
    pub fn clear(&self) -> HeaderValue {
        // 빈 값과 고정 속성만으로 구성되므로 항상 유효한 헤더 값
        self.build("", 0)
            .unwrap_or_else(|_| HeaderValue::from_static("auth-token=; Path=/; Max-Age=0"))
    }

    /// 요청의 Cookie 헤더에서 세션 토큰 조회 (빈 값은 없음으로 취급)
    /// Read the session token from the request's Cookie header(s)
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name.trim() == SESSION_COOKIE_NAME).then(|| value.trim().to_string())
            })
            .find(|value| !value.is_empty())
    }

    fn build(&self, value: &str, max_age: i64) -> Result<HeaderValue, AuthError> {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
            SESSION_COOKIE_NAME, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        HeaderValue::from_str(&cookie)
            .map_err(|e| AuthError::Internal(format!("Invalid session cookie value: {}", e)))
    }
}
