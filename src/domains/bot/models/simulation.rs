use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 시뮬레이션 기본 일수
pub const DEFAULT_SIMULATION_DAYS: i64 = 7;

/// 허용되는 최대 시뮬레이션 일수
pub const MAX_SIMULATION_DAYS: i64 = 365;

/// 시뮬레이션 요청
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub account_id: Option<i64>,
    #[schema(example = "BTC-USD")]
    pub trading_pair: Option<String>,
    /// "thousand_trades" | "ten_trades"
    #[schema(example = "thousand_trades")]
    pub strategy_type: Option<String>,
    /// 기본값: 7
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimulateResponse {
    pub message: String,
    /// 외부 엔진이 반환한 JSON 그대로
    #[schema(value_type = Object)]
    pub results: serde_json::Value,
}

/// 외부 엔진 출력 중 저장에 필요한 요약 필드
/// Summary fields required from the simulation output
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSummary {
    pub initial_capital: f64,
    pub final_capital: f64,
    pub total_trades: i64,
    pub profitable_trades: i64,
    pub losing_trades: i64,
    pub total_profit_loss: f64,
}

/// 저장된 시뮬레이션 (DB row / 응답)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Simulation {
    pub id: i64,
    pub account_id: i64,
    pub bot_id: i64,
    pub trading_pair: String,
    pub strategy_type: String,
    pub initial_capital: f64,
    pub final_capital: f64,
    pub total_trades: i64,
    pub profitable_trades: i64,
    pub losing_trades: i64,
    pub total_profit_loss: f64,
    pub simulation_days: i64,
    pub created_at: DateTime<Utc>,
}

/// 시뮬레이션 저장 데이터
#[derive(Debug, Clone)]
pub struct NewSimulation {
    pub user_id: i64,
    pub account_id: i64,
    pub bot_id: i64,
    pub trading_pair: String,
    pub strategy_type: String,
    pub summary: SimulationSummary,
    pub simulation_days: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimulationsResponse {
    pub simulations: Vec<Simulation>,
}
