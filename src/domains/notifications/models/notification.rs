use serde::Serialize;
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 조회 시 반환되는 최대 알림 수
pub const NOTIFICATION_PAGE_SIZE: i64 = 50;

/// 시스템이 생성한 알림 유형
pub const SYSTEM_NOTIFICATION: &str = "system";

/// 알림 (DB row / 응답)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[schema(example = "system")]
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// 알림 생성 데이터
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: String,
}

impl NewNotification {
    pub fn system(user_id: i64, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            message: message.into(),
            notification_type: SYSTEM_NOTIFICATION.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}
