use sqlx::{SqlitePool, Row};
use anyhow::{Context, Result};
use chrono::Utc;

/// 시장 분석 결과 저장소
/// Stores raw analysis JSON per symbol
pub struct AnalysisRepository {
    pool: SqlitePool,
}

impl AnalysisRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, symbol: &str, analysis_type: &str, analysis: &serde_json::Value) -> Result<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO market_analyses (symbol, analysis_type, analysis_data, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(symbol)
        .bind(analysis_type)
        .bind(analysis.to_string())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to store market analysis")?;

        Ok(row.get("id"))
    }

    /// 심볼별 저장된 분석 수
    pub async fn count_for_symbol(&self, symbol: &str) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM market_analyses WHERE symbol = ?")
            .bind(symbol)
            .fetch_one(&self.pool)
            .await
            .context("Failed to count market analyses")?;

        Ok(row.get("count"))
    }
}
