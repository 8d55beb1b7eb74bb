use crate::shared::database::{AccountRepository, ApiKeyRepository, Database};
use crate::domains::accounts::models::{
    Account, AccountType, CreateDemoAccountRequest, CreateRealAccountRequest, NewAccount,
    DEFAULT_CURRENCY,
};
use crate::shared::errors::TradingError;
use crate::shared::utils::required_text;

/// 거래 계정 서비스
/// Account Service: demo and exchange-linked accounts
#[derive(Clone)]
pub struct AccountService {
    db: Database,
}

impl AccountService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 사용자의 모든 계정 조회
    pub async fn list_accounts(&self, user_id: i64) -> Result<Vec<Account>, TradingError> {
        let account_repo = AccountRepository::new(self.db.pool().clone());

        account_repo
            .list_for_user(user_id)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to fetch accounts: {}", e)))
    }

    /// 데모 계정 생성
    /// initialCapital > 0 필수, currency 기본값 USD
    pub async fn create_demo_account(
        &self,
        user_id: i64,
        request: CreateDemoAccountRequest,
    ) -> Result<i64, TradingError> {
        let initial_capital = request
            .initial_capital
            .filter(|c| c.is_finite() && *c > 0.0)
            .ok_or_else(|| TradingError::Validation("Initial capital must be greater than 0".to_string()))?;

        let currency = required_text(request.currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let account = NewAccount {
            user_id,
            account_type: AccountType::Demo,
            initial_capital,
            current_balance: initial_capital,
            currency,
        };

        let account_id = AccountRepository::insert(self.db.pool(), &account)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to create demo account: {}", e)))?;

        tracing::info!(user_id, account_id, initial_capital, "demo account created");
        Ok(account_id)
    }

    /// 실계정 생성 (API 키 저장 + 잔고 0 계정)
    /// 두 insert는 하나의 트랜잭션
    pub async fn create_real_account(
        &self,
        user_id: i64,
        request: CreateRealAccountRequest,
    ) -> Result<i64, TradingError> {
        let (exchange, api_key, api_secret) = match (
            required_text(request.exchange),
            required_text(request.api_key),
            required_text(request.api_secret),
        ) {
            (Some(exchange), Some(key), Some(secret)) => (exchange, key, secret),
            _ => {
                return Err(TradingError::Validation(
                    "Exchange, API key and API secret are required".to_string(),
                ))
            }
        };

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        ApiKeyRepository::insert(&mut *tx, user_id, &exchange, &api_key, &api_secret)
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to store API key: {}", e)))?;

        let account_id = AccountRepository::insert(&mut *tx, &NewAccount::pending_real(user_id))
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to create real account: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| TradingError::DatabaseError(format!("Failed to commit real account: {}", e)))?;

        tracing::info!(user_id, account_id, exchange = %exchange, "real account created");
        Ok(account_id)
    }
}
