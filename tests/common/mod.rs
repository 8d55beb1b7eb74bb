// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 인메모리 SQLite + stub 실행기로 전체 라우터를 구성하고
//       요청/응답 헬퍼를 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let ctx = setup_test().await;
//     let cookie = register_and_login(&ctx, "alice").await;
//     // 테스트 코드...
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trading_bot_api::routes::create_app;
use trading_bot_api::shared::clients::{AnalysisRunner, RunnerError, Script};
use trading_bot_api::shared::config::AppConfig;
use trading_bot_api::shared::database::Database;
use trading_bot_api::shared::services::AppState;

// 테스트용 상수
pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "pw123";

/// 외부 엔진 대신 고정 JSON을 반환하는 실행기
/// 호출된 스크립트와 인자를 기록함
pub struct StubRunner {
    pub calls: Mutex<Vec<(Script, Vec<String>)>>,
    pub fail: bool,
    pub simulation_output: Value,
}

impl StubRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
            simulation_output: sample_simulation_output(),
        }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    pub fn with_simulation_output(output: Value) -> Self {
        Self { simulation_output: output, ..Self::new() }
    }

    pub fn recorded_calls(&self) -> Vec<(Script, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisRunner for StubRunner {
    async fn run(&self, script: Script, args: Vec<String>) -> Result<Value, RunnerError> {
        self.calls.lock().unwrap().push((script, args.clone()));

        if self.fail {
            return Err(RunnerError::Stderr {
                script: script.file_name(),
                stderr: "Traceback: engine exploded".to_string(),
            });
        }

        Ok(match script {
            Script::MarketAnalysis => json!({ "symbol": args[1], "trend": "bullish", "rsi": 61.2 }),
            Script::MarketData => json!({ "symbol": args[0], "interval": args[1], "range": args[2], "candles": [] }),
            Script::TradingStrategies => self.simulation_output.clone(),
        })
    }
}

pub fn sample_simulation_output() -> Value {
    json!({
        "initial_capital": 10000.0,
        "final_capital": 10250.5,
        "total_trades": 1000,
        "profitable_trades": 620,
        "losing_trades": 380,
        "total_profit_loss": 250.5,
        "win_rate": 62.0
    })
}

/// 테스트 컨텍스트
pub struct TestContext {
    pub app: Router,
    pub state: AppState,
    pub runner: Arc<StubRunner>,
}

/// 테스트 전 초기화 (기본 stub 실행기)
pub async fn setup_test() -> TestContext {
    setup_test_with_runner(StubRunner::new()).await
}

/// 지정한 stub 실행기로 초기화
///
/// 1. 인메모리 DB 생성 + 마이그레이션
/// 2. AppState 생성
/// 3. gate가 적용된 라우터 생성
pub async fn setup_test_with_runner(runner: StubRunner) -> TestContext {
    let db = Database::in_memory()
        .await
        .expect("Failed to open in-memory database");
    db.initialize()
        .await
        .expect("Failed to initialize database");

    let config = AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        _ => None,
    })
    .expect("Failed to build test config");

    let runner = Arc::new(runner);
    let state = AppState::with_runner(db, config, runner.clone());
    let app = create_app(state.clone());

    TestContext { app, state, runner }
}

/// 테스트 응답
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Set-Cookie 헤더 값 (auth-token)
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    }

    /// 요청에 다시 보낼 "auth-token=<value>" 부분
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next().map(|pair| pair.trim().to_string()))
    }

    pub fn location(&self) -> Option<String> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    }
}

pub async fn send(ctx: &TestContext, request: Request<Body>) -> TestResponse {
    let response = ctx
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse { status, headers, body }
}

pub async fn get(ctx: &TestContext, path: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(ctx, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(ctx: &TestContext, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(ctx, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// 회원가입 (201 기대) 후 user id 반환
pub async fn register(ctx: &TestContext, username: &str) -> i64 {
    let response = post_json(
        ctx,
        "/api/auth/register",
        json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": TEST_PASSWORD
        }),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED, "register failed: {}", response.body);
    response.body["userId"].as_i64().expect("userId missing")
}

/// 로그인 후 요청용 쿠키 반환
pub async fn login(ctx: &TestContext, username: &str) -> String {
    let response = post_json(
        ctx,
        "/api/auth/login",
        json!({ "username": username, "password": TEST_PASSWORD }),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
    response.session_cookie().expect("login did not set a cookie")
}

pub async fn register_and_login(ctx: &TestContext, username: &str) -> String {
    register(ctx, username).await;
    login(ctx, username).await
}

/// 사용자의 첫 번째 (데모) 계정 ID
pub async fn first_account_id(ctx: &TestContext, cookie: &str) -> i64 {
    let response = get(ctx, "/api/accounts", Some(cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["accounts"][0]["id"].as_i64().expect("no account")
}

/// 봇 설정 후 bot id 반환
pub async fn configure_bot(ctx: &TestContext, cookie: &str, account_id: i64, pair: &str) -> i64 {
    let response = post_json(
        ctx,
        "/api/bots/configure",
        json!({
            "accountId": account_id,
            "tradingPair": pair,
            "botType": "thousand_trades",
            "entryPercentage": 5.88,
            "takeProfitPercentage": 0.18,
            "stopLossPercentage": 0.09
        }),
        Some(cookie),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK, "configure failed: {}", response.body);
    response.body["botId"].as_i64().expect("botId missing")
}
