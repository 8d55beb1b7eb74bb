use sqlx::{Executor, Sqlite, SqlitePool, Row};
use sqlx::sqlite::SqliteRow;
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::bot::models::{BotConfiguration, StrategyParams};

const BOT_COLUMNS: &str = "b.id, b.account_id, b.trading_pair, b.bot_type, b.is_active, \
    b.entry_percentage, b.take_profit_percentage, b.stop_loss_percentage, \
    b.max_loss_multiplier, b.max_loss_multiplier_count, b.max_weekly_loss_percentage";

/// Bot Configuration Repository
/// 봇 설정 데이터베이스 작업 처리
pub struct BotRepository {
    pool: SqlitePool,
}

impl BotRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// (account_id, trading_pair) 기준 upsert
    ///
    /// 기존 설정이 있으면 파라미터만 갱신하고 (is_active 유지),
    /// 없으면 is_active = 0 으로 새로 생성. 영향받은 봇 ID 반환.
    pub async fn upsert(
        &self,
        account_id: i64,
        trading_pair: &str,
        bot_type: &str,
        params: &StrategyParams,
    ) -> Result<i64> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO bot_configurations
                (account_id, trading_pair, bot_type, is_active, entry_percentage, take_profit_percentage,
                 stop_loss_percentage, max_loss_multiplier, max_loss_multiplier_count, max_weekly_loss_percentage,
                 created_at, updated_at)
            VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
            ON CONFLICT (account_id, trading_pair) DO UPDATE SET
                bot_type = excluded.bot_type,
                entry_percentage = excluded.entry_percentage,
                take_profit_percentage = excluded.take_profit_percentage,
                stop_loss_percentage = excluded.stop_loss_percentage,
                max_loss_multiplier = excluded.max_loss_multiplier,
                max_loss_multiplier_count = excluded.max_loss_multiplier_count,
                max_weekly_loss_percentage = excluded.max_weekly_loss_percentage,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(account_id)
        .bind(trading_pair)
        .bind(bot_type)
        .bind(params.entry_percentage)
        .bind(params.take_profit_percentage)
        .bind(params.stop_loss_percentage)
        .bind(params.max_loss_multiplier)
        .bind(params.max_loss_multiplier_count)
        .bind(params.max_weekly_loss_percentage)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to save bot configuration")?;

        Ok(row.get("id"))
    }

    /// 계정 + 거래쌍으로 봇 설정 조회
    pub async fn find_by_account_and_pair(
        &self,
        account_id: i64,
        trading_pair: &str,
    ) -> Result<Option<BotConfiguration>> {
        let sql = format!(
            "SELECT {} FROM bot_configurations b WHERE b.account_id = ? AND b.trading_pair = ?",
            BOT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(account_id)
            .bind(trading_pair)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch bot configuration")?;

        Ok(row.as_ref().map(map_bot))
    }

    /// 소유권 확인 (봇 → 계정 → 사용자 조인)
    /// Fetch a bot only if its account belongs to the user
    pub async fn find_owned(&self, bot_id: i64, user_id: i64) -> Result<Option<BotConfiguration>> {
        let sql = format!(
            "SELECT {} FROM bot_configurations b \
             JOIN accounts a ON b.account_id = a.id \
             WHERE b.id = ? AND a.user_id = ?",
            BOT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(bot_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch bot configuration")?;

        Ok(row.as_ref().map(map_bot))
    }

    /// 사용자의 모든 봇 설정
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<BotConfiguration>> {
        let sql = format!(
            "SELECT {} FROM bot_configurations b \
             JOIN accounts a ON b.account_id = a.id \
             WHERE a.user_id = ? \
             ORDER BY b.id",
            BOT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch bot configurations")?;

        Ok(rows.iter().map(map_bot).collect())
    }

    /// 실행 중인 봇 수
    pub async fn count_active_for_user(&self, user_id: i64) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM bot_configurations b
            JOIN accounts a ON b.account_id = a.id
            WHERE a.user_id = ? AND b.is_active = 1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count active bots")?;

        Ok(row.get("count"))
    }

    /// 활성 상태 변경 (트랜잭션 안에서도 사용 가능)
    pub async fn set_active<'e, E>(executor: E, bot_id: i64, is_active: bool) -> Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("UPDATE bot_configurations SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(Utc::now())
            .bind(bot_id)
            .execute(executor)
            .await
            .context("Failed to update bot status")?;

        Ok(())
    }
}

fn map_bot(row: &SqliteRow) -> BotConfiguration {
    BotConfiguration {
        id: row.get("id"),
        account_id: row.get("account_id"),
        trading_pair: row.get("trading_pair"),
        bot_type: row.get("bot_type"),
        is_active: row.get("is_active"),
        entry_percentage: row.get("entry_percentage"),
        take_profit_percentage: row.get("take_profit_percentage"),
        stop_loss_percentage: row.get("stop_loss_percentage"),
        max_loss_multiplier: row.get("max_loss_multiplier"),
        max_loss_multiplier_count: row.get("max_loss_multiplier_count"),
        max_weekly_loss_percentage: row.get("max_weekly_loss_percentage"),
    }
}
