use std::sync::Arc;
use crate::shared::config::AppConfig;
use crate::shared::database::Database;
use crate::shared::clients::{AnalysisRunner, ScriptRunner};
use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::accounts::services::AccountService;
use crate::domains::bot::services::BotService;
use crate::domains::market::services::MarketService;
use crate::domains::notifications::services::NotificationService;
use crate::domains::dashboard::services::DashboardService;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 서비스를 조합)
/// 
/// 요청 간 공유되는 것은 불변 설정, DB 풀, 스크립트 실행기뿐.
/// 세션 테이블 같은 가변 상태는 없음.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 (공유)
    /// Database connection (shared)
    pub db: Database,
    pub auth_state: AuthState,
    pub account_service: AccountService,
    pub bot_service: BotService,
    pub market_service: MarketService,
    pub notification_service: NotificationService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Create AppState with database and configuration
    /// 외부 스크립트는 tokio::process 기반 ScriptRunner로 실행
    pub fn new(db: Database, config: AppConfig) -> Self {
        let runner: Arc<dyn AnalysisRunner> = Arc::new(ScriptRunner::new(&config.runner));
        Self::with_runner(db, config, runner)
    }

    /// 실행기를 직접 지정하여 생성 (테스트에서 stub 주입)
    /// Create AppState with an explicit analysis runner
    pub fn with_runner(db: Database, config: AppConfig, runner: Arc<dyn AnalysisRunner>) -> Self {
        // 1. 공유 서비스 생성 (JWT 등)
        let jwt_service = JwtService::new(&config.jwt_secret);

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(db.clone(), jwt_service, config.production);

        // 3. AppState 조합
        Self {
            auth_state,
            account_service: AccountService::new(db.clone()),
            bot_service: BotService::new(db.clone(), runner.clone()),
            market_service: MarketService::new(db.clone(), runner),
            notification_service: NotificationService::new(db.clone()),
            dashboard_service: DashboardService::new(db.clone()),
            db,
        }
    }
}
