// Auth domain state
// 인증 도메인 상태
use crate::shared::database::Database;
use crate::domains::auth::services::{AuthService, JwtService, SessionCookie};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
    pub session_cookie: SessionCookie,
}

impl AuthState {
    /// Create AuthState with database, JWT service and cookie policy
    /// AuthState 생성 (production 모드면 Secure 쿠키)
    pub fn new(db: Database, jwt_service: JwtService, secure_cookie: bool) -> Self {
        Self {
            auth_service: AuthService::new(db, jwt_service.clone()),
            jwt_service,
            session_cookie: SessionCookie::new(secure_cookie),
        }
    }
}
