use serde::Serialize;
use utoipa::ToSchema;

/// 대시보드 요약
/// Dashboard overview for the signed-in user
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardOverview {
    #[schema(example = "alice")]
    pub username: String,
    pub account_count: usize,
    /// 모든 계정 잔고 합계
    #[schema(example = 10000.0)]
    pub total_balance: f64,
    pub active_bots: i64,
    pub unread_notifications: i64,
}
