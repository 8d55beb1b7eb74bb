use crate::shared::database::{AccountRepository, BotRepository, Database, NotificationRepository, UserRepository};
use crate::domains::dashboard::models::DashboardOverview;
use crate::shared::errors::TradingError;

/// 대시보드 서비스
/// Dashboard Service: aggregates accounts, bots and notifications
#[derive(Clone)]
pub struct DashboardService {
    db: Database,
}

impl DashboardService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn overview(&self, user_id: i64) -> Result<DashboardOverview, TradingError> {
        let pool = self.db.pool().clone();

        // 토큰은 유효하지만 사용자가 삭제된 경우
        let user = UserRepository::new(pool.clone())
            .get_user_by_id(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(TradingError::Unauthenticated)?;

        let accounts = AccountRepository::new(pool.clone())
            .list_for_user(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch accounts: {}", e)))?;

        let active_bots = BotRepository::new(pool.clone())
            .count_active_for_user(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to count bots: {}", e)))?;

        let unread_notifications = NotificationRepository::new(pool)
            .count_unread(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to count notifications: {}", e)))?;

        Ok(DashboardOverview {
            username: user.username,
            account_count: accounts.len(),
            total_balance: accounts.iter().map(|a| a.current_balance).sum(),
            active_bots,
            unread_notifications,
        })
    }
}
