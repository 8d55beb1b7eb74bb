use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde_json::json;

/// 인증된 사용자 정보 (edge gate가 세션 토큰에서 추출)
/// Authenticated user information (decoded once by the edge gate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 토큰 검증은 gate에서 한 번만 수행되고, 여기서는 request extension만 읽음.
/// 검증된 신원이 없으면 401.
///
/// 사용법:
/// ```rust,ignore
/// pub async fn list_accounts(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "message": "Unauthorized" })),
                )
            })
    }
}
