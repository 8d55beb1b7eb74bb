use std::sync::Arc;
use serde_json::Value;
use crate::shared::database::{
    AccountRepository, BotRepository, Database, NotificationRepository, SimulationRepository,
};
use crate::shared::clients::{AnalysisRunner, Script};
use crate::domains::bot::models::{
    BotAction, BotConfiguration, ConfigureBotRequest, ControlBotRequest, NewSimulation,
    SimulateRequest, Simulation, SimulationSummary, StrategyParams, StrategyType,
    DEFAULT_MAX_WEEKLY_LOSS_PERCENTAGE, DEFAULT_SIMULATION_DAYS, MAX_SIMULATION_DAYS,
};
use crate::domains::accounts::models::Account;
use crate::domains::notifications::models::NewNotification;
use crate::shared::errors::TradingError;
use crate::shared::utils::{require_safe_argument, required_text};

/// 최근 시뮬레이션 조회 개수
pub const SIMULATION_HISTORY_LIMIT: i64 = 20;

/// 봇 서비스
/// Bot Service: configuration, start/stop control and strategy simulation
#[derive(Clone)]
pub struct BotService {
    db: Database,
    runner: Arc<dyn AnalysisRunner>,
}

impl BotService {
    pub fn new(db: Database, runner: Arc<dyn AnalysisRunner>) -> Self {
        Self { db, runner }
    }

    /// 사용자의 모든 봇 설정 조회
    pub async fn list_bots(&self, user_id: i64) -> Result<Vec<BotConfiguration>, TradingError> {
        BotRepository::new(self.db.pool().clone())
            .list_for_user(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch bots: {}", e)))
    }

    /// 봇 설정 저장 (account_id + trading_pair 기준 upsert)
    ///
    /// # Returns
    /// * 생성 또는 갱신된 봇 ID
    ///
    /// # Errors
    /// - 필수 필드 누락 (400)
    /// - 소유하지 않은 계정 (403)
    pub async fn configure(&self, user_id: i64, request: ConfigureBotRequest) -> Result<i64, TradingError> {
        let (account_id, trading_pair, bot_type) = match (
            request.account_id,
            required_text(request.trading_pair),
            required_text(request.bot_type),
        ) {
            (Some(account_id), Some(pair), Some(bot_type)) => (account_id, pair, bot_type),
            _ => {
                return Err(TradingError::Validation(
                    "Account ID, trading pair and bot type are required".to_string(),
                ))
            }
        };
        // 시뮬레이션 시 스크립트 인자로 전달됨
        require_safe_argument("trading pair", &trading_pair)?;

        self.ensure_account_owned(account_id, user_id).await?;

        let params = StrategyParams {
            entry_percentage: request.entry_percentage,
            take_profit_percentage: request.take_profit_percentage,
            stop_loss_percentage: request.stop_loss_percentage,
            max_loss_multiplier: request.max_loss_multiplier,
            max_loss_multiplier_count: request.max_loss_multiplier_count,
            max_weekly_loss_percentage: request
                .max_weekly_loss_percentage
                .unwrap_or(DEFAULT_MAX_WEEKLY_LOSS_PERCENTAGE),
        };

        let bot_id = BotRepository::new(self.db.pool().clone())
            .upsert(account_id, &trading_pair, &bot_type, &params)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to save bot configuration: {}", e)))?;

        tracing::info!(user_id, account_id, bot_id, trading_pair = %trading_pair, "bot configured");
        Ok(bot_id)
    }

    /// 봇 시작/정지
    ///
    /// 활성 상태 변경과 시스템 알림 생성은 하나의 트랜잭션.
    /// 소유하지 않은 봇이면 상태를 바꾸지 않고 403.
    pub async fn control(&self, user_id: i64, request: ControlBotRequest) -> Result<BotAction, TradingError> {
        let bot_id = request
            .bot_id
            .ok_or_else(|| TradingError::Validation("Bot ID and action are required".to_string()))?;
        let action = request
            .action
            .as_deref()
            .and_then(BotAction::parse)
            .ok_or_else(|| TradingError::Validation("Action must be 'start' or 'stop'".to_string()))?;

        let bot = BotRepository::new(self.db.pool().clone())
            .find_owned(bot_id, user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch bot: {}", e)))?
            .ok_or_else(|| TradingError::Forbidden("Access denied".to_string()))?;

        let (title, verb) = match action {
            BotAction::Start => ("Bot started", "started"),
            BotAction::Stop => ("Bot stopped", "stopped"),
        };
        let notification = NewNotification::system(
            user_id,
            title,
            format!("Trading bot for {} has been {}", bot.trading_pair, verb),
        );

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        BotRepository::set_active(&mut *tx, bot.id, action.is_active())
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to update bot status: {}", e)))?;

        NotificationRepository::insert(&mut *tx, &notification)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to create notification: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to commit bot status: {}", e)))?;

        tracing::info!(user_id, bot_id, status = action.status(), "bot status changed");
        Ok(action)
    }

    /// 전략 시뮬레이션 실행 및 결과 저장
    ///
    /// 외부 엔진: trading_strategies.py simulate <strategy> <pair> <balance> <days>
    ///
    /// # Errors
    /// - 필수 필드 누락 / 잘못된 전략 / days 범위 밖 (400)
    /// - 소유하지 않은 계정 (403)
    /// - 해당 거래쌍의 봇 설정 없음 (404)
    /// - 엔진 실패 또는 요약 필드 누락 (500)
    pub async fn simulate(&self, user_id: i64, request: SimulateRequest) -> Result<Value, TradingError> {
        let (account_id, trading_pair, strategy) = match (
            request.account_id,
            required_text(request.trading_pair),
            required_text(request.strategy_type),
        ) {
            (Some(account_id), Some(pair), Some(strategy)) => (account_id, pair, strategy),
            _ => {
                return Err(TradingError::Validation(
                    "Account ID, trading pair and strategy type are required".to_string(),
                ))
            }
        };
        let strategy = StrategyType::parse(&strategy)
            .ok_or_else(|| TradingError::Validation("Invalid strategy type".to_string()))?;
        require_safe_argument("trading pair", &trading_pair)?;

        let days = request.days.unwrap_or(DEFAULT_SIMULATION_DAYS);
        if !(1..=MAX_SIMULATION_DAYS).contains(&days) {
            return Err(TradingError::Validation(format!(
                "Days must be between 1 and {}",
                MAX_SIMULATION_DAYS
            )));
        }

        let account = self.ensure_account_owned(account_id, user_id).await?;

        let bot = BotRepository::new(self.db.pool().clone())
            .find_by_account_and_pair(account.id, &trading_pair)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch bot configuration: {}", e)))?
            .ok_or_else(|| TradingError::NotFound("Bot configuration not found".to_string()))?;

        let args = vec![
            "simulate".to_string(),
            strategy.as_str().to_string(),
            trading_pair.clone(),
            account.current_balance.to_string(),
            days.to_string(),
        ];
        let results = self.runner.run(Script::TradingStrategies, args).await?;

        let summary: SimulationSummary = serde_json::from_value(results.clone())
            .map_err(|e| TradingError::Internal(format!("Simulation output missing summary fields: {}", e)))?;

        let simulation = NewSimulation {
            user_id,
            account_id: account.id,
            bot_id: bot.id,
            trading_pair,
            strategy_type: strategy.as_str().to_string(),
            summary,
            simulation_days: days,
        };

        let simulation_id = SimulationRepository::new(self.db.pool().clone())
            .insert(&simulation)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to store simulation: {}", e)))?;

        tracing::info!(user_id, simulation_id, strategy = strategy.as_str(), days, "simulation completed");
        Ok(results)
    }

    /// 최근 시뮬레이션 기록 (최신순)
    pub async fn list_simulations(&self, user_id: i64) -> Result<Vec<Simulation>, TradingError> {
        SimulationRepository::new(self.db.pool().clone())
            .list_recent(user_id, SIMULATION_HISTORY_LIMIT)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch simulations: {}", e)))
    }

    async fn ensure_account_owned(
        &self,
        account_id: i64,
        user_id: i64,
    ) -> Result<Account, TradingError> {
        AccountRepository::new(self.db.pool().clone())
            .find_owned(account_id, user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch account: {}", e)))?
            .ok_or_else(|| TradingError::Forbidden("Access denied".to_string()))
    }
}
