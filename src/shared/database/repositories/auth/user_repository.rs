use sqlx::{Executor, Sqlite, SqlitePool, Row};
use sqlx::sqlite::SqliteRow;
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::auth::models::user::User;


pub struct UserRepository {
    pool: SqlitePool
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 사용자 생성 (트랜잭션 안에서도 사용 가능)
    /// Insert a user; accepts a pool or a transaction connection
    pub async fn insert<'e, E>(
        executor: E,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
        .context("Failed to create user")?;

        Ok(row.get("id"))
    }

    // 사용자명 또는 이메일 중복 확인 (회원가입용)
    pub async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM users
            WHERE username = ? OR email = ?
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check username/email existence")?;

        Ok(row.get::<i64, _>("count") > 0)
    }

    // 사용자명으로 사용자 조회 (로그인용)
    // Get user by username (for login)
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, last_login
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by username")?;

        Ok(row.map(|r| map_user(&r)))
    }

    // ID로 사용자 조회
    // Get user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, last_login
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        Ok(row.map(|r| map_user(&r)))
    }

    /// 마지막 로그인 시각 갱신
    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update last login")?;

        Ok(())
    }
}

fn map_user(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
        last_login: row.get("last_login"),
    }
}
