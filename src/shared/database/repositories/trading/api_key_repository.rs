use sqlx::{Executor, Sqlite, Row};
use anyhow::{Context, Result};
use chrono::Utc;

/// 거래소 API 키 저장소
///
/// NOTE: api_secret은 평문으로 저장됨 (at-rest 암호화 없음)
pub struct ApiKeyRepository;

impl ApiKeyRepository {
    pub async fn insert<'e, E>(
        executor: E,
        user_id: i64,
        exchange: &str,
        api_key: &str,
        api_secret: &str,
    ) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO api_keys (user_id, exchange, api_key, api_secret, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(exchange)
        .bind(api_key)
        .bind(api_secret)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
        .context("Failed to store api key")?;

        Ok(row.get("id"))
    }
}
