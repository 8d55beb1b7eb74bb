// =====================================================
// 계정 통합 테스트
// =====================================================

mod common;
use common::*;
use axum::http::StatusCode;
use serde_json::json;
use sqlx::Row;

/// 테스트: 데모 계정 생성 (통화 기본값 USD)
#[tokio::test]
async fn test_create_demo_account() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;

    let response = post_json(&ctx, "/api/accounts/demo", json!({ "initialCapital": 2500.0 }), Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let account_id = response.body["accountId"].as_i64().unwrap();

    let accounts = get(&ctx, "/api/accounts", Some(&cookie)).await;
    let accounts = accounts.body["accounts"].as_array().unwrap().clone();
    assert_eq!(accounts.len(), 2);

    let created = accounts
        .iter()
        .find(|a| a["id"].as_i64() == Some(account_id))
        .expect("created account missing");
    assert_eq!(created["account_type"], "demo");
    assert_eq!(created["initial_capital"].as_f64(), Some(2500.0));
    assert_eq!(created["current_balance"].as_f64(), Some(2500.0));
    assert_eq!(created["currency"], "USD");
}

/// 테스트: 초기 자본이 없거나 0 이하 → 400
#[tokio::test]
async fn test_create_demo_account_requires_positive_capital() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;

    for body in [json!({}), json!({ "initialCapital": 0 }), json!({ "initialCapital": -10.0 })] {
        let response = post_json(&ctx, "/api/accounts/demo", body.clone(), Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
    }
}

/// 테스트: 실계정 생성 → 잔고 0, API 키 저장
#[tokio::test]
async fn test_create_real_account_stores_credentials() {
    let ctx = setup_test().await;
    let user_id = register(&ctx, "alice").await;
    let cookie = login(&ctx, "alice").await;

    let response = post_json(
        &ctx,
        "/api/accounts/real",
        json!({ "exchange": "binance", "apiKey": "key-1", "apiSecret": "secret-1" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let account_id = response.body["accountId"].as_i64().unwrap();

    let accounts = get(&ctx, "/api/accounts", Some(&cookie)).await;
    let real = accounts.body["accounts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"].as_i64() == Some(account_id))
        .cloned()
        .unwrap();
    assert_eq!(real["account_type"], "real");
    assert_eq!(real["current_balance"].as_f64(), Some(0.0));

    let row = sqlx::query("SELECT exchange, api_key FROM api_keys WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(ctx.state.db.pool())
        .await
        .unwrap();
    assert_eq!(row.get::<String, _>("exchange"), "binance");
    assert_eq!(row.get::<String, _>("api_key"), "key-1");

    // 응답에 비밀키가 노출되지 않음
    assert!(!accounts.body.to_string().contains("secret-1"));
}

/// 테스트: 실계정 필수 필드 누락 → 400, 아무것도 저장되지 않음
#[tokio::test]
async fn test_create_real_account_requires_credentials() {
    let ctx = setup_test().await;
    let cookie = register_and_login(&ctx, "alice").await;

    let response = post_json(
        &ctx,
        "/api/accounts/real",
        json!({ "exchange": "binance", "apiKey": "key-1" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM api_keys")
        .fetch_one(ctx.state.db.pool())
        .await
        .unwrap()
        .get("count");
    assert_eq!(count, 0);
}

/// 테스트: 계정 목록은 본인 것만
#[tokio::test]
async fn test_accounts_are_scoped_to_caller() {
    let ctx = setup_test().await;
    let alice = register_and_login(&ctx, "alice").await;
    let bob = register_and_login(&ctx, "bob").await;

    post_json(&ctx, "/api/accounts/demo", json!({ "initialCapital": 100.0 }), Some(&alice)).await;

    let alice_accounts = get(&ctx, "/api/accounts", Some(&alice)).await;
    let bob_accounts = get(&ctx, "/api/accounts", Some(&bob)).await;

    assert_eq!(alice_accounts.body["accounts"].as_array().unwrap().len(), 2);
    assert_eq!(bob_accounts.body["accounts"].as_array().unwrap().len(), 1);
}
