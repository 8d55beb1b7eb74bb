use std::path::PathBuf;
use std::time::Duration;
use anyhow::{bail, Context, Result};

/// 애플리케이션 설정
/// Application configuration
///
/// 프로세스 시작 시 한 번 로드되고 AppState에 주입됩니다.
/// Loaded once at startup and injected into AppState; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite 연결 문자열
    /// SQLite connection string (e.g. "sqlite://data/trading_bot.db")
    pub database_url: String,

    /// JWT 서명 키
    /// Shared secret used to sign session tokens
    pub jwt_secret: String,

    /// production 모드면 쿠키에 Secure 속성 추가
    /// Production mode marks the session cookie `Secure`
    pub production: bool,

    pub bind_addr: String,

    pub cors_origin: String,

    pub runner: RunnerConfig,
}

/// 외부 분석/시뮬레이션 스크립트 실행 설정
/// External analysis/simulation script runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// 인터프리터 (기본값: python3)
    pub interpreter: String,

    /// 스크립트 디렉토리
    /// Directory holding market_analysis.py, market_data.py, trading_strategies.py
    pub scripts_dir: PathBuf,

    /// 실행 제한 시간
    pub timeout: Duration,

    /// 동시 실행 가능한 스크립트 수
    pub max_concurrent: usize,

    /// stdout/stderr 최대 크기 (bytes)
    pub max_output_bytes: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            scripts_dir: PathBuf::from("scripts"),
            timeout: Duration::from_secs(60),
            max_concurrent: 4,
            max_output_bytes: 4 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// 환경변수에서 설정 로드 (.env 파일 포함)
    /// Load configuration from environment variables (.env file included)
    pub fn from_env() -> Result<Self> {
        // .env가 없어도 에러 아님
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key -> value 조회 함수로 설정 구성
    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .context("JWT_SECRET must be set to a non-empty value")?;

        let production = lookup("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let defaults = RunnerConfig::default();

        let timeout_secs = parse_or(&lookup, "RUNNER_TIMEOUT_SECS", defaults.timeout.as_secs())?;
        let max_concurrent = parse_or(&lookup, "RUNNER_MAX_CONCURRENT", defaults.max_concurrent)?;
        let max_output_bytes =
            parse_or(&lookup, "RUNNER_MAX_OUTPUT_BYTES", defaults.max_output_bytes)?;

        if timeout_secs == 0 {
            bail!("RUNNER_TIMEOUT_SECS must be greater than 0");
        }
        if max_concurrent == 0 {
            bail!("RUNNER_MAX_CONCURRENT must be greater than 0");
        }

        let runner = RunnerConfig {
            interpreter: lookup("PYTHON_BIN").unwrap_or(defaults.interpreter),
            scripts_dir: lookup("SCRIPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.scripts_dir),
            timeout: Duration::from_secs(timeout_secs),
            max_concurrent,
            max_output_bytes,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://data/trading_bot.db".to_string()),
            jwt_secret,
            production,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3002".to_string()),
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            runner,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {} ({})", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_jwt_secret_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(result.is_err());

        let result = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert!(!config.production);
        assert_eq!(config.bind_addr, "0.0.0.0:3002");
        assert_eq!(config.runner.interpreter, "python3");
        assert_eq!(config.runner.timeout, Duration::from_secs(60));
        assert_eq!(config.runner.max_concurrent, 4);
    }

    #[test]
    fn production_mode_and_runner_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("APP_ENV", "Production"),
            ("RUNNER_TIMEOUT_SECS", "5"),
            ("RUNNER_MAX_CONCURRENT", "2"),
            ("SCRIPTS_DIR", "/opt/scripts"),
        ]))
        .unwrap();

        assert!(config.production);
        assert_eq!(config.runner.timeout, Duration::from_secs(5));
        assert_eq!(config.runner.max_concurrent, 2);
        assert_eq!(config.runner.scripts_dir, PathBuf::from("/opt/scripts"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("RUNNER_MAX_CONCURRENT", "many"),
        ]));
        assert!(result.is_err());

        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("RUNNER_TIMEOUT_SECS", "0"),
        ]));
        assert!(result.is_err());
    }
}
