use sqlx::{Executor, Sqlite, SqlitePool, Row};
use sqlx::sqlite::SqliteRow;
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::accounts::models::{Account, NewAccount};

/// Account Repository
/// 거래 계정 데이터베이스 작업 처리
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 계정 생성 (트랜잭션 안에서도 사용 가능)
    /// Insert an account; accepts a pool or a transaction connection
    pub async fn insert<'e, E>(executor: E, account: &NewAccount) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO accounts (user_id, account_type, initial_capital, current_balance, currency, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 1, ?, ?)
            RETURNING id
            "#,
        )
        .bind(account.user_id)
        .bind(account.account_type.as_str())
        .bind(account.initial_capital)
        .bind(account.current_balance)
        .bind(&account.currency)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
        .context("Failed to create account")?;

        Ok(row.get("id"))
    }

    /// 사용자의 모든 계정 조회
    /// List all accounts of a user
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_type, initial_capital, current_balance, currency, is_active
            FROM accounts
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch accounts")?;

        Ok(rows.iter().map(map_account).collect())
    }

    /// 소유자 확인과 함께 계정 조회
    /// Fetch an account only if it belongs to the user
    pub async fn find_owned(&self, account_id: i64, user_id: i64) -> Result<Option<Account>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_type, initial_capital, current_balance, currency, is_active
            FROM accounts
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(account_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch account")?;

        Ok(row.as_ref().map(map_account))
    }
}

fn map_account(row: &SqliteRow) -> Account {
    Account {
        id: row.get("id"),
        account_type: row.get("account_type"),
        initial_capital: row.get("initial_capital"),
        current_balance: row.get("current_balance"),
        currency: row.get("currency"),
        is_active: row.get("is_active"),
    }
}
