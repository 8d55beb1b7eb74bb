use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use trading_bot_api::routes::create_app;
use trading_bot_api::shared::config::AppConfig;
use trading_bot_api::shared::database::Database;
use trading_bot_api::shared::services::AppState;

// Import models for OpenAPI schema
use trading_bot_api::domains::auth::models::*;
use trading_bot_api::domains::accounts::models::*;
use trading_bot_api::domains::bot::models::*;
use trading_bot_api::domains::notifications::models::*;
use trading_bot_api::domains::dashboard::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        trading_bot_api::domains::auth::handlers::auth_handler::register,
        trading_bot_api::domains::auth::handlers::auth_handler::login,
        trading_bot_api::domains::auth::handlers::auth_handler::logout,
        trading_bot_api::domains::auth::handlers::auth_handler::session,
        trading_bot_api::domains::accounts::handlers::account_handler::list_accounts,
        trading_bot_api::domains::accounts::handlers::account_handler::create_demo_account,
        trading_bot_api::domains::accounts::handlers::account_handler::create_real_account,
        trading_bot_api::domains::bot::handlers::bot_handler::list_bots,
        trading_bot_api::domains::bot::handlers::bot_handler::configure_bot,
        trading_bot_api::domains::bot::handlers::bot_handler::control_bot,
        trading_bot_api::domains::bot::handlers::bot_handler::simulate,
        trading_bot_api::domains::bot::handlers::bot_handler::list_simulations,
        trading_bot_api::domains::market::handlers::market_handler::get_analysis,
        trading_bot_api::domains::market::handlers::market_handler::get_market_data,
        trading_bot_api::domains::notifications::handlers::notification_handler::list_notifications,
        trading_bot_api::domains::dashboard::handlers::dashboard_handler::get_dashboard
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        SessionResponse,
        SessionUser,
        UserResponse,
        MessageResponse,
        Account,
        AccountType,
        AccountsResponse,
        CreateDemoAccountRequest,
        CreateRealAccountRequest,
        CreateAccountResponse,
        BotConfiguration,
        BotsResponse,
        StrategyType,
        ConfigureBotRequest,
        ConfigureBotResponse,
        ControlBotRequest,
        ControlBotResponse,
        SimulateRequest,
        SimulateResponse,
        Simulation,
        SimulationsResponse,
        Notification,
        NotificationsResponse,
        DashboardOverview
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Registration, login and cookie sessions"),
        (name = "Accounts", description = "Demo and exchange-linked trading accounts"),
        (name = "Bots", description = "Bot configuration, control and strategy simulation"),
        (name = "Market", description = "Market analysis and market data (external engine)"),
        (name = "Notifications", description = "User notifications"),
        (name = "Dashboard", description = "Gated dashboard page data")
    ),
    info(
        title = "Trading Bot Dashboard API",
        description = "API server for the trading-bot dashboard",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: 세션은 auth-token 쿠키로 전달
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "CookieAuth",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new("auth-token"),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 로깅 초기화 (RUST_LOG 우선)
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trading_bot_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드 (.env 포함)
    let config = AppConfig::from_env()?;

    // DB 연결 + 마이그레이션
    let db = Database::new(&config.database_url).await?;
    db.initialize().await?;

    let bind_addr = config.bind_addr.clone();
    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?;
    let production = config.production;
    let scripts_dir = config.runner.scripts_dir.clone();

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, config);

    // CORS 설정 (쿠키 전달을 위해 credentials 허용)
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성 (Swagger는 gate 바깥)
    let app = create_app(app_state)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(
        addr = %bind_addr,
        production,
        scripts_dir = %scripts_dir.display(),
        "Server running (Swagger UI at /docs)"
    );

    // 서버 실행
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
