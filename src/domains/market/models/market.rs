use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_INTERVAL: &str = "1d";
pub const DEFAULT_RANGE: &str = "1mo";

/// 저장되는 분석 종류
pub const COMPREHENSIVE_ANALYSIS: &str = "comprehensive";

/// 시장 데이터 조회 파라미터
/// Query parameters for market data
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MarketQuery {
    /// 캔들 간격 (기본값: 1d)
    #[param(example = "1h")]
    pub interval: Option<String>,

    /// 조회 기간 (기본값: 1mo)
    #[param(example = "5d")]
    pub range: Option<String>,
}
