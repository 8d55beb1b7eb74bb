use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 주간 최대 손실률 기본값 (%)
pub const DEFAULT_MAX_WEEKLY_LOSS_PERCENTAGE: f64 = 20.0;

/// 전략 종류
/// Strategy implemented by the external engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// 하루 1000회 거래 (진입 5.88%, 익절 0.18%, 손절 0.09%)
    ThousandTrades,
    /// 하루 10회 거래
    TenTrades,
}

impl StrategyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::ThousandTrades => "thousand_trades",
            StrategyType::TenTrades => "ten_trades",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "thousand_trades" => Some(StrategyType::ThousandTrades),
            "ten_trades" => Some(StrategyType::TenTrades),
            _ => None,
        }
    }
}

/// 봇 제어 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Start,
    Stop,
}

impl BotAction {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" => Some(BotAction::Start),
            "stop" => Some(BotAction::Stop),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BotAction::Start)
    }

    /// 응답에 쓰이는 상태 문자열
    pub fn status(&self) -> &'static str {
        match self {
            BotAction::Start => "running",
            BotAction::Stop => "stopped",
        }
    }
}

/// 봇 설정 (DB row / 응답)
/// Bot configuration, unique per (account_id, trading_pair)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BotConfiguration {
    pub id: i64,
    pub account_id: i64,
    #[schema(example = "BTC-USD")]
    pub trading_pair: String,
    #[schema(example = "thousand_trades")]
    pub bot_type: String,
    pub is_active: bool,
    pub entry_percentage: Option<f64>,
    pub take_profit_percentage: Option<f64>,
    pub stop_loss_percentage: Option<f64>,
    pub max_loss_multiplier: Option<f64>,
    pub max_loss_multiplier_count: Option<i64>,
    pub max_weekly_loss_percentage: f64,
}

/// 전략 파라미터
/// Strategy parameters written by configure
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParams {
    pub entry_percentage: Option<f64>,
    pub take_profit_percentage: Option<f64>,
    pub stop_loss_percentage: Option<f64>,
    pub max_loss_multiplier: Option<f64>,
    pub max_loss_multiplier_count: Option<i64>,
    pub max_weekly_loss_percentage: f64,
}

/// 봇 설정 저장 요청
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureBotRequest {
    pub account_id: Option<i64>,
    #[schema(example = "BTC-USD")]
    pub trading_pair: Option<String>,
    #[schema(example = "thousand_trades")]
    pub bot_type: Option<String>,
    #[schema(example = 5.88)]
    pub entry_percentage: Option<f64>,
    #[schema(example = 0.18)]
    pub take_profit_percentage: Option<f64>,
    #[schema(example = 0.09)]
    pub stop_loss_percentage: Option<f64>,
    #[schema(example = 2.0)]
    pub max_loss_multiplier: Option<f64>,
    #[schema(example = 5)]
    pub max_loss_multiplier_count: Option<i64>,
    /// 기본값: 20
    pub max_weekly_loss_percentage: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigureBotResponse {
    pub message: String,
    #[serde(rename = "botId")]
    pub bot_id: i64,
}

/// 봇 시작/정지 요청
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlBotRequest {
    pub bot_id: Option<i64>,
    /// "start" | "stop"
    #[schema(example = "start")]
    pub action: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ControlBotResponse {
    pub message: String,
    /// "running" | "stopped"
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BotsResponse {
    pub bots: Vec<BotConfiguration>,
}
