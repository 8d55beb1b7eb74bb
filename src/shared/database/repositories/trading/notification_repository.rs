use sqlx::{Executor, Sqlite, SqlitePool, Row};
use anyhow::{Context, Result};
use chrono::Utc;
use crate::domains::notifications::models::{NewNotification, Notification};

/// Notification Repository
/// 알림 데이터베이스 작업 처리
pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 알림 생성 (트랜잭션 안에서도 사용 가능)
    pub async fn insert<'e, E>(executor: E, notification: &NewNotification) -> Result<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query(
            r#"
            INSERT INTO notifications (user_id, title, message, notification_type, is_read, created_at)
            VALUES (?, ?, ?, ?, 0, ?)
            RETURNING id
            "#,
        )
        .bind(notification.user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.notification_type)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
        .context("Failed to create notification")?;

        Ok(row.get("id"))
    }

    /// 최신순 알림 조회
    /// Latest notifications first
    pub async fn list_recent(&self, user_id: i64, limit: i64) -> Result<Vec<Notification>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, message, notification_type, is_read, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch notifications")?;

        Ok(rows
            .iter()
            .map(|row| Notification {
                id: row.get("id"),
                title: row.get("title"),
                message: row.get("message"),
                notification_type: row.get("notification_type"),
                is_read: row.get("is_read"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    /// 읽지 않은 알림 수
    pub async fn count_unread(&self, user_id: i64) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM notifications WHERE user_id = ? AND is_read = 0")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to count unread notifications")?;

        Ok(row.get("count"))
    }
}
