use sqlx::{SqlitePool, Row};
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::bot::models::{NewSimulation, Simulation};

/// Simulation Repository
/// 시뮬레이션 결과 저장/조회
pub struct SimulationRepository {
    pool: SqlitePool,
}

impl SimulationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, simulation: &NewSimulation) -> Result<i64> {
        let summary = &simulation.summary;
        let row = sqlx::query(
            r#"
            INSERT INTO simulations
                (user_id, account_id, bot_id, trading_pair, strategy_type, initial_capital, final_capital,
                 total_trades, profitable_trades, losing_trades, total_profit_loss, simulation_days, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(simulation.user_id)
        .bind(simulation.account_id)
        .bind(simulation.bot_id)
        .bind(&simulation.trading_pair)
        .bind(&simulation.strategy_type)
        .bind(summary.initial_capital)
        .bind(summary.final_capital)
        .bind(summary.total_trades)
        .bind(summary.profitable_trades)
        .bind(summary.losing_trades)
        .bind(summary.total_profit_loss)
        .bind(simulation.simulation_days)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to store simulation")?;

        Ok(row.get("id"))
    }

    /// 최근 시뮬레이션 조회
    pub async fn list_recent(&self, user_id: i64, limit: i64) -> Result<Vec<Simulation>> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_id, bot_id, trading_pair, strategy_type, initial_capital, final_capital,
                   total_trades, profitable_trades, losing_trades, total_profit_loss, simulation_days, created_at
            FROM simulations
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch simulations")?;

        Ok(rows
            .iter()
            .map(|row| Simulation {
                id: row.get("id"),
                account_id: row.get("account_id"),
                bot_id: row.get("bot_id"),
                trading_pair: row.get("trading_pair"),
                strategy_type: row.get("strategy_type"),
                initial_capital: row.get("initial_capital"),
                final_capital: row.get("final_capital"),
                total_trades: row.get("total_trades"),
                profitable_trades: row.get("profitable_trades"),
                losing_trades: row.get("losing_trades"),
                total_profit_loss: row.get("total_profit_loss"),
                simulation_days: row.get("simulation_days"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}
