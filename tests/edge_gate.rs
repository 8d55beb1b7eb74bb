// =====================================================
// Edge Access Gate 통합 테스트
// =====================================================
// 페이지 경로는 /auth/login으로 redirect, API 경로는 401

mod common;
use common::*;
use axum::http::StatusCode;
use chrono::{Duration, Utc};

fn tamper(token: &str) -> String {
    // payload 첫 글자 변경 → 서명 불일치
    let mut parts: Vec<String> = token.split('.').map(|p| p.to_string()).collect();
    let first = parts[1].remove(0);
    parts[1].insert(0, if first == 'e' { 'f' } else { 'e' });
    parts.join(".")
}

/// 테스트: 쿠키 없이 /dashboard → 307 /auth/login
#[tokio::test]
async fn test_dashboard_without_cookie_redirects_to_login() {
    let ctx = setup_test().await;

    let response = get(&ctx, "/dashboard", None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location().as_deref(), Some("/auth/login"));
}

/// 테스트: 만료된 토큰 → redirect
#[tokio::test]
async fn test_dashboard_with_expired_cookie_redirects() {
    let ctx = setup_test().await;
    let user_id = register(&ctx, "alice").await;

    let issued_at = Utc::now() - Duration::hours(24) - Duration::seconds(1);
    let token = ctx
        .state
        .auth_state
        .jwt_service
        .issue_at(user_id, "alice", issued_at)
        .unwrap();

    let response = get(&ctx, "/dashboard", Some(&format!("auth-token={}", token))).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location().as_deref(), Some("/auth/login"));
}

/// 테스트: 변조된 토큰 → redirect
#[tokio::test]
async fn test_dashboard_with_tampered_cookie_redirects() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;
    let token = cookie.trim_start_matches("auth-token=");

    let response = get(&ctx, "/dashboard", Some(&format!("auth-token={}", tamper(token)))).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

/// 테스트: 다른 키로 서명된 토큰 → redirect
#[tokio::test]
async fn test_dashboard_with_foreign_token_redirects() {
    let ctx = setup_test().await;
    let user_id = register(&ctx, "alice").await;

    let foreign = trading_bot_api::domains::auth::services::JwtService::new("someone-else")
        .issue(user_id, "alice")
        .unwrap();

    let response = get(&ctx, "/dashboard", Some(&format!("auth-token={}", foreign))).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

/// 테스트: 유효한 쿠키 → 대시보드 요약
#[tokio::test]
async fn test_dashboard_with_valid_cookie_is_allowed() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;

    let response = get(&ctx, "/dashboard", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["account_count"], 1);
    assert_eq!(response.body["total_balance"].as_f64(), Some(10000.0));
    assert_eq!(response.body["active_bots"], 0);
    assert_eq!(response.body["unread_notifications"], 0);
}

/// 테스트: public 경로는 쿠키 없이도 redirect 되지 않음
#[tokio::test]
async fn test_public_paths_are_not_redirected() {
    let ctx = setup_test().await;

    for path in ["/auth/login", "/auth/register"] {
        let response = get(&ctx, path, None).await;
        assert_ne!(response.status, StatusCode::TEMPORARY_REDIRECT, "{}", path);
    }
}

/// 테스트: API 경로는 redirect 대신 401
#[tokio::test]
async fn test_api_paths_answer_unauthorized_instead_of_redirect() {
    let ctx = setup_test().await;

    for path in ["/api/accounts", "/api/bots", "/api/notifications", "/api/analysis/BTC-USD"] {
        let response = get(&ctx, path, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", path);
        assert!(response.location().is_none());
        assert_eq!(response.body["message"], "Unauthorized");
    }

    // 인증 없이 호출 가능한 API
    let logout = get(&ctx, "/api/auth/logout", None).await;
    assert_eq!(logout.status, StatusCode::OK);
}
