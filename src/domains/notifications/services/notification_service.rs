use crate::shared::database::{Database, NotificationRepository};
use crate::domains::notifications::models::{Notification, NOTIFICATION_PAGE_SIZE};
use crate::shared::errors::TradingError;

/// 알림 서비스
/// Notification Service
#[derive(Clone)]
pub struct NotificationService {
    db: Database,
}

impl NotificationService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 최근 알림 50개 (최신순)
    pub async fn list_recent(&self, user_id: i64) -> Result<Vec<Notification>, TradingError> {
        NotificationRepository::new(self.db.pool().clone())
            .list_recent(user_id, NOTIFICATION_PAGE_SIZE)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch notifications: {}", e)))
    }
}
