use crate::shared::database::{AccountRepository, Database, UserRepository};
use crate::domains::auth::models::{LoginRequest, RegisterRequest, User};
use crate::domains::accounts::models::{Account, NewAccount};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::SaltString;
use rand::rngs::OsRng;

// 인증 서비스
// AuthService: handles registration, login and session reconstruction
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    // 회원가입 (비즈니스 로직)
    // Returns: 새 사용자 ID
    pub async fn register(&self, request: RegisterRequest) -> Result<i64, AuthError> {
        let (username, email, password) = match (
            non_blank(request.username),
            non_blank(request.email),
            request.password.filter(|p| !p.is_empty()),
        ) {
            (Some(u), Some(e), Some(p)) => (u, e, p),
            _ => {
                return Err(AuthError::Validation(
                    "Username, email and password are required".to_string(),
                ))
            }
        };

        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 사용자명/이메일 중복 확인
        let exists = user_repo
            .exists_by_username_or_email(&username, &email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check user existence: {}", e)))?;

        if exists {
            return Err(AuthError::DuplicateUser);
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&password)?;

        // 3. 사용자 + 기본 데모 계정 생성 (하나의 트랜잭션)
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        let user_id = UserRepository::insert(&mut *tx, &username, &email, &password_hash)
            .await
            .map_err(map_insert_error)?;

        AccountRepository::insert(&mut *tx, &NewAccount::default_demo(user_id))
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create demo account: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to commit registration: {}", e)))?;

        tracing::info!(user_id, username = %username, "user registered");
        Ok(user_id)
    }

    // 로그인 (비즈니스 로직)
    // Returns: (User, session token)
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String), AuthError> {
        let (username, password) = match (
            non_blank(request.username),
            request.password.filter(|p| !p.is_empty()),
        ) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                return Err(AuthError::Validation(
                    "Username and password are required".to_string(),
                ))
            }
        };

        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 사용자명으로 사용자 조회
        let user = user_repo
            .get_user_by_username(&username)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증 (사용자 없음과 같은 에러)
        Self::verify_password(&password, &user.password_hash)?;

        // 3. 마지막 로그인 시각 갱신
        user_repo
            .update_last_login(user.id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to update last login: {}", e)))?;

        // 4. 세션 토큰 발급
        let token = self.jwt_service.issue(user.id, &user.username)?;

        tracing::info!(user_id = user.id, "user logged in");
        Ok((user, token))
    }

    /// 세션 재구성: 토큰의 사용자 ID로 사용자와 계정 재조회
    /// Returns None when the user no longer exists
    pub async fn load_session(&self, user_id: i64) -> Result<Option<(User, Vec<Account>)>, AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());
        let account_repo = AccountRepository::new(self.db.pool().clone());

        let user = match user_repo
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
        {
            Some(u) => u,
            None => return Ok(None),
        };

        let accounts = account_repo
            .list_for_user(user.id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch accounts: {}", e)))?;

        Ok(Some((user, accounts)))
    }

    fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// 동시 가입 경합으로 UNIQUE 제약에 걸린 경우도 중복으로 처리
fn map_insert_error(err: anyhow::Error) -> AuthError {
    let is_unique_violation = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false);

    if is_unique_violation {
        AuthError::DuplicateUser
    } else {
        AuthError::DatabaseError(format!("Failed to create user: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_only_the_original_password() {
        let hash = AuthService::hash_password("pw123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(AuthService::verify_password("pw123", &hash).is_ok());
        assert!(matches!(
            AuthService::verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = AuthService::hash_password("pw123").unwrap();
        let b = AuthService::hash_password("pw123").unwrap();
        assert_ne!(a, b);
    }
}
