use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 토큰 검사 없이 통과하는 경로 (prefix 매칭)
/// Paths reachable without a session
pub const PUBLIC_PATHS: [&str; 2] = ["/auth/login", "/auth/register"];

/// 거부된 페이지 요청의 redirect 대상
pub const LOGIN_PATH: &str = "/auth/login";

const API_PREFIX: &str = "/api";

/// Gate 판정 결과
/// Edge Access Gate decision
#[derive(Debug)]
pub enum GateDecision {
    /// 통과 (public 경로면 identity 없음)
    Allowed { identity: Option<AuthenticatedUser> },
    /// 거부 (MissingToken / InvalidToken / ExpiredToken)
    Denied { reason: AuthError },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed { .. })
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|prefix| path.starts_with(prefix))
}

/// JSON API 경로는 redirect 대상이 아님
pub fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/api/")
}

/// 경로와 세션 토큰으로 접근 여부 판정
/// Pure decision over (path, token, now); holds no state between calls
pub fn evaluate(path: &str, token: Option<&str>, jwt: &JwtService, now: DateTime<Utc>) -> GateDecision {
    if is_public_path(path) {
        return GateDecision::Allowed { identity: None };
    }

    let Some(token) = token else {
        return GateDecision::Denied { reason: AuthError::MissingToken };
    };

    match jwt.verify_at(token, now) {
        Ok(claims) => GateDecision::Allowed {
            identity: Some(AuthenticatedUser {
                user_id: claims.user_id,
                username: claims.username,
            }),
        },
        Err(reason) => GateDecision::Denied { reason },
    }
}

/// Edge Access Gate 미들웨어
///
/// - 허용: 검증된 신원을 request extension에 첨부
/// - 거부 + 페이지 경로: 307 -> /auth/login
/// - 거부 + API 경로: 신원 없이 통과 (핸들러가 401 응답)
pub async fn edge_gate(State(app_state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let token = app_state.auth_state.session_cookie.read(request.headers());

    let decision = evaluate(
        &path,
        token.as_deref(),
        &app_state.auth_state.jwt_service,
        Utc::now(),
    );

    match decision {
        GateDecision::Allowed { identity } => {
            if let Some(identity) = identity {
                request.extensions_mut().insert(identity);
            }
            next.run(request).await
        }
        GateDecision::Denied { reason } if is_api_path(&path) => {
            tracing::debug!(path = %path, reason = %reason, "api request without valid session");
            next.run(request).await
        }
        GateDecision::Denied { reason } => {
            tracing::debug!(path = %path, reason = %reason, "redirecting to login");
            redirect_to_login()
        }
    }
}

fn redirect_to_login() -> Response {
    (
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, HeaderValue::from_static(LOGIN_PATH))],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn jwt() -> JwtService {
        JwtService::new("gate-secret")
    }

    #[test]
    fn public_paths_pass_without_token() {
        let jwt = jwt();
        for path in ["/auth/login", "/auth/register", "/auth/login/help"] {
            let decision = evaluate(path, None, &jwt, Utc::now());
            assert!(matches!(decision, GateDecision::Allowed { identity: None }), "{}", path);
        }
    }

    #[test]
    fn public_paths_ignore_garbage_tokens() {
        let decision = evaluate("/auth/login", Some("garbage"), &jwt(), Utc::now());
        assert!(decision.is_allowed());
    }

    #[test]
    fn protected_path_without_token_is_denied() {
        let decision = evaluate("/dashboard", None, &jwt(), Utc::now());
        assert!(matches!(
            decision,
            GateDecision::Denied { reason: AuthError::MissingToken }
        ));
    }

    #[test]
    fn protected_path_with_fresh_token_is_allowed_with_identity() {
        let jwt = jwt();
        let token = jwt.issue(3, "alice").unwrap();

        match evaluate("/dashboard", Some(&token), &jwt, Utc::now()) {
            GateDecision::Allowed { identity: Some(user) } => {
                assert_eq!(user.user_id, 3);
                assert_eq!(user.username, "alice");
            }
            other => panic!("expected allowed with identity, got {:?}", other),
        }
    }

    #[test]
    fn expired_token_is_denied() {
        let jwt = jwt();
        let issued_at = Utc::now() - Duration::hours(25);
        let token = jwt.issue_at(3, "alice", issued_at).unwrap();

        assert!(matches!(
            evaluate("/dashboard", Some(&token), &jwt, Utc::now()),
            GateDecision::Denied { reason: AuthError::ExpiredToken }
        ));
    }

    #[test]
    fn tampered_token_is_denied() {
        let jwt = jwt();
        let mut token = jwt.issue(3, "alice").unwrap();
        token.push('x');

        assert!(matches!(
            evaluate("/dashboard", Some(&token), &jwt, Utc::now()),
            GateDecision::Denied { reason: AuthError::InvalidToken }
        ));
    }

    #[test]
    fn api_path_detection() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/auth/session"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/dashboard"));
    }
}
