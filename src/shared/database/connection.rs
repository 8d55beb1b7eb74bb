use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use anyhow::{Context, Result};

// 데이터베이스 연결 풀
// Database connection pool for SQLite
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    // 데이터베이스 연결 생성
    // Create database connection
    // db_url: SQLite 연결 문자열 (예: "sqlite://data/trading_bot.db")
    pub async fn new(db_url: &str) -> Result<Self> {
        // 데이터 디렉토리가 없으면 생성
        if let Some(path) = db_url.strip_prefix("sqlite://") {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create database directory {:?}", parent))?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(db_url)
            .context("Invalid database url")?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }

    /// 테스트용 인메모리 DB
    /// In-memory database; a single long-lived connection keeps the data alive
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory database url")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        Ok(Self { pool })
    }

    // 연결 풀 반환
    // Get connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // 테이블 생성 (초기화) - 마이그레이션 실행
    // Create tables (initialization) - Run migrations
    // migrations/ 폴더의 모든 .sql 파일을 순서대로 실행
    pub async fn initialize(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool())
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_all_tables() {
        let db = Database::in_memory().await.unwrap();
        db.initialize().await.unwrap();

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
             ('users', 'accounts', 'api_keys', 'bot_configurations', 'notifications', 'simulations', 'market_analyses')",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(count, 7);
    }
}
