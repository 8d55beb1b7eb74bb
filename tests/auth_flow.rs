// =====================================================
// 인증 흐름 통합 테스트
// =====================================================
// 회원가입 → 로그인 → 세션 조회 → 로그아웃

mod common;
use common::*;
use axum::http::StatusCode;
use serde_json::json;

/// 테스트: alice 가입 → 로그인 → 세션에 데모 계정 1개 (10000 USD)
#[tokio::test]
async fn test_register_login_session_scenario() {
    let ctx = setup_test().await;

    let user_id = register(&ctx, "alice").await;
    let cookie = login(&ctx, "alice").await;

    let response = get(&ctx, "/api/auth/session", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["id"].as_i64(), Some(user_id));
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"].get("password_hash").is_none());
    assert!(!body["user"]["last_login"].is_null());

    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["account_type"], "demo");
    assert_eq!(accounts[0]["current_balance"].as_f64(), Some(10000.0));
    assert_eq!(accounts[0]["initial_capital"].as_f64(), Some(10000.0));
    assert_eq!(accounts[0]["currency"], "USD");
}

/// 테스트: 로그인 쿠키 속성 + 토큰이 사용자 ID로 디코딩됨
#[tokio::test]
async fn test_login_sets_session_cookie_for_user() {
    let ctx = setup_test().await;
    let user_id = register(&ctx, "alice").await;

    let response = post_json(
        &ctx,
        "/api/auth/login",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"].as_i64(), Some(user_id));
    assert_eq!(response.body["user"]["username"], "alice");
    assert!(response.body.get("token").is_none());

    let set_cookie = response.set_cookie().expect("missing Set-Cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=86400"));
    // 테스트 설정은 production 모드가 아님
    assert!(!set_cookie.contains("Secure"));

    let token = response
        .session_cookie()
        .unwrap()
        .trim_start_matches("auth-token=")
        .to_string();
    let claims = ctx.state.auth_state.jwt_service.verify(&token).unwrap();
    assert_eq!(claims.user_id, user_id);
    assert_eq!(claims.username, "alice");
}

/// 테스트: 중복 사용자명/이메일 → 409
#[tokio::test]
async fn test_register_duplicate_returns_conflict() {
    let ctx = setup_test().await;
    register(&ctx, "alice").await;

    let same_username = post_json(
        &ctx,
        "/api/auth/register",
        json!({ "username": "alice", "email": "other@example.com", "password": "x" }),
        None,
    )
    .await;
    assert_eq!(same_username.status, StatusCode::CONFLICT);

    let same_email = post_json(
        &ctx,
        "/api/auth/register",
        json!({ "username": "alice2", "email": "alice@example.com", "password": "x" }),
        None,
    )
    .await;
    assert_eq!(same_email.status, StatusCode::CONFLICT);
    assert!(same_email.body["message"].is_string());
}

/// 테스트: 필수 필드 누락 → 400
#[tokio::test]
async fn test_register_missing_fields_returns_bad_request() {
    let ctx = setup_test().await;

    for body in [
        json!({ "email": "a@example.com", "password": "pw" }),
        json!({ "username": "a", "password": "pw" }),
        json!({ "username": "a", "email": "a@example.com" }),
        json!({ "username": "", "email": "a@example.com", "password": "pw" }),
        json!({}),
    ] {
        let response = post_json(&ctx, "/api/auth/register", body.clone(), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
    }
}

/// 테스트: 로그인 필수 필드 누락 → 400
#[tokio::test]
async fn test_login_missing_fields_returns_bad_request() {
    let ctx = setup_test().await;

    let response = post_json(&ctx, "/api/auth/login", json!({ "username": "alice" }), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.set_cookie().is_none());
}

/// 테스트: 잘못된 비밀번호 / 없는 사용자 → 같은 401 메시지, 쿠키 없음
#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let ctx = setup_test().await;
    register(&ctx, "alice").await;

    let wrong_password = post_json(
        &ctx,
        "/api/auth/login",
        json!({ "username": "alice", "password": "wrong" }),
        None,
    )
    .await;
    let unknown_user = post_json(
        &ctx,
        "/api/auth/login",
        json!({ "username": "nobody", "password": "wrong" }),
        None,
    )
    .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
    assert!(wrong_password.set_cookie().is_none());
    assert!(unknown_user.set_cookie().is_none());
}

/// 테스트: 로그아웃은 두 번 호출해도 200 + 쿠키 만료
#[tokio::test]
async fn test_logout_is_idempotent() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;

    let first = get(&ctx, "/api/auth/logout", Some(&cookie)).await;
    let second = get(&ctx, "/api/auth/logout", None).await;

    for response in [&first, &second] {
        assert_eq!(response.status, StatusCode::OK);
        let set_cookie = response.set_cookie().expect("logout must clear the cookie");
        assert!(set_cookie.starts_with("auth-token=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    // 브라우저가 저장하게 될 빈 쿠키로는 세션 없음
    let cleared = first.session_cookie().unwrap();
    let session = get(&ctx, "/api/auth/session", Some(&cleared)).await;
    assert_eq!(session.status, StatusCode::UNAUTHORIZED);
    assert_eq!(session.body["authenticated"], false);
}

/// 테스트: 쿠키 없음 / 위조 쿠키 → 401 {authenticated:false}
#[tokio::test]
async fn test_session_without_valid_cookie_is_unauthenticated() {
    let ctx = setup_test().await;

    let no_cookie = get(&ctx, "/api/auth/session", None).await;
    assert_eq!(no_cookie.status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_cookie.body["authenticated"], false);
    assert!(no_cookie.body.get("user").is_none());

    let forged = get(&ctx, "/api/auth/session", Some("auth-token=not.a.token")).await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
    assert_eq!(forged.body["authenticated"], false);
}

/// 테스트: 유효한 토큰이지만 사용자가 없음 → 401
#[tokio::test]
async fn test_session_for_missing_user_is_unauthenticated() {
    let ctx = setup_test().await;

    let token = ctx.state.auth_state.jwt_service.issue(999, "ghost").unwrap();
    let response = get(&ctx, "/api/auth/session", Some(&format!("auth-token={}", token))).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["authenticated"], false);
}

/// 테스트: 사용자명 앞뒤 공백은 가입/로그인 모두 무시
#[tokio::test]
async fn test_username_is_trimmed_for_register_and_login() {
    let ctx = setup_test().await;

    let registered = post_json(
        &ctx,
        "/api/auth/register",
        json!({ "username": " alice ", "email": "alice@example.com", "password": TEST_PASSWORD }),
        None,
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED);

    for username in ["alice", " alice "] {
        let response = post_json(
            &ctx,
            "/api/auth/login",
            json!({ "username": username, "password": TEST_PASSWORD }),
            None,
        )
        .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", username);
        assert_eq!(response.body["user"]["username"], "alice");
    }
}
