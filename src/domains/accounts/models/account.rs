use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 회원가입 시 자동 생성되는 데모 계정 초기 자본
/// Capital of the demo account created at registration
pub const DEFAULT_DEMO_CAPITAL: f64 = 10_000.0;

pub const DEFAULT_CURRENCY: &str = "USD";

/// 계정 종류
/// Account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// 가상 자본 계정
    Demo,
    /// 거래소 연동 계정
    Real,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Demo => "demo",
            AccountType::Real => "real",
        }
    }
}

/// 거래 계정 (DB row / 응답)
/// Trading account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Account {
    pub id: i64,
    #[schema(example = "demo")]
    pub account_type: String,
    #[schema(example = 10000.0)]
    pub initial_capital: f64,
    #[schema(example = 10000.0)]
    pub current_balance: f64,
    #[schema(example = "USD")]
    pub currency: String,
    pub is_active: bool,
}

/// 계정 생성 데이터
/// Data for inserting an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_id: i64,
    pub account_type: AccountType,
    pub initial_capital: f64,
    pub current_balance: f64,
    pub currency: String,
}

impl NewAccount {
    /// 기본 데모 계정 (10000 USD)
    pub fn default_demo(user_id: i64) -> Self {
        Self {
            user_id,
            account_type: AccountType::Demo,
            initial_capital: DEFAULT_DEMO_CAPITAL,
            current_balance: DEFAULT_DEMO_CAPITAL,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// 거래소 동기화 전까지 잔고 0인 실계정
    pub fn pending_real(user_id: i64) -> Self {
        Self {
            user_id,
            account_type: AccountType::Real,
            initial_capital: 0.0,
            current_balance: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// 데모 계정 생성 요청
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDemoAccountRequest {
    #[schema(example = 5000.0)]
    pub initial_capital: Option<f64>,
    /// 기본값: USD
    #[schema(example = "USD")]
    pub currency: Option<String>,
}

/// 실계정 생성 요청 (거래소 API 키)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRealAccountRequest {
    #[schema(example = "binance")]
    pub exchange: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAccountResponse {
    pub message: String,
    #[serde(rename = "accountId")]
    pub account_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
}
