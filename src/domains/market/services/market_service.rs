use std::sync::Arc;
use serde_json::Value;
use crate::shared::database::{AnalysisRepository, Database};
use crate::shared::clients::{AnalysisRunner, Script};
use crate::domains::market::models::{MarketQuery, COMPREHENSIVE_ANALYSIS, DEFAULT_INTERVAL, DEFAULT_RANGE};
use crate::shared::errors::TradingError;
use crate::shared::utils::{require_safe_argument, required_text};

/// 시장 분석/데이터 서비스
/// Market Service: delegates to the external analysis scripts
#[derive(Clone)]
pub struct MarketService {
    db: Database,
    runner: Arc<dyn AnalysisRunner>,
}

impl MarketService {
    pub fn new(db: Database, runner: Arc<dyn AnalysisRunner>) -> Self {
        Self { db, runner }
    }

    /// 종합 분석 (market_analysis.py analyze <symbol>)
    /// 결과는 market_analyses 테이블에 저장 후 그대로 반환
    pub async fn analyze(&self, symbol: &str) -> Result<Value, TradingError> {
        require_safe_argument("symbol", symbol)?;

        let analysis = self
            .runner
            .run(Script::MarketAnalysis, vec!["analyze".to_string(), symbol.to_string()])
            .await?;

        let analysis_id = AnalysisRepository::new(self.db.pool().clone())
            .insert(symbol, COMPREHENSIVE_ANALYSIS, &analysis)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to store analysis: {}", e)))?;

        tracing::debug!(analysis_id, symbol, "market analysis stored");
        Ok(analysis)
    }

    /// 시세 데이터 (market_data.py <symbol> <interval> <range>)
    pub async fn market_data(&self, symbol: &str, query: MarketQuery) -> Result<Value, TradingError> {
        // 빈 값은 미지정과 같음 (?interval=&range=)
        let interval = required_text(query.interval).unwrap_or_else(|| DEFAULT_INTERVAL.to_string());
        let range = required_text(query.range).unwrap_or_else(|| DEFAULT_RANGE.to_string());

        require_safe_argument("symbol", symbol)?;
        require_safe_argument("interval", &interval)?;
        require_safe_argument("range", &range)?;

        let data = self
            .runner
            .run(Script::MarketData, vec![symbol.to_string(), interval, range])
            .await?;

        Ok(data)
    }
}
