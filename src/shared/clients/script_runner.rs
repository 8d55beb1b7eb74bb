use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::Semaphore;
use crate::shared::config::RunnerConfig;

/// 외부 분석/시뮬레이션 스크립트
/// External analysis/simulation scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// market_analysis.py analyze <symbol>
    MarketAnalysis,
    /// market_data.py <symbol> <interval> <range>
    MarketData,
    /// trading_strategies.py simulate <strategy> <pair> <capital> <days>
    TradingStrategies,
}

impl Script {
    pub fn file_name(&self) -> &'static str {
        match self {
            Script::MarketAnalysis => "market_analysis.py",
            Script::MarketData => "market_data.py",
            Script::TradingStrategies => "trading_strategies.py",
        }
    }
}

/// 스크립트 실행 에러
/// Script runner errors
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to spawn {script}: {source}")]
    Spawn {
        script: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output of {script}: {source}")]
    Io {
        script: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{script} timed out after {timeout:?}")]
    Timeout {
        script: &'static str,
        timeout: Duration,
    },

    /// stderr에 출력이 있으면 exit code와 관계없이 실패
    #[error("{script} wrote to stderr: {stderr}")]
    Stderr { script: &'static str, stderr: String },

    #[error("{script} exited with status {code:?}")]
    ExitStatus { script: &'static str, code: Option<i32> },

    #[error("{script} output exceeded {limit} bytes")]
    OutputTooLarge { script: &'static str, limit: usize },

    #[error("{script} returned invalid JSON: {source}")]
    InvalidJson {
        script: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Runner is shutting down")]
    Closed,
}

/// 외부 엔진 호출 인터페이스
/// Seam for delegating analysis/simulation to an external engine
#[async_trait]
pub trait AnalysisRunner: Send + Sync {
    /// 위치 인자만 전달하고 stdout의 단일 JSON 문서를 반환
    /// Run with positional arguments only, returning the single JSON document on stdout
    async fn run(&self, script: Script, args: Vec<String>) -> Result<serde_json::Value, RunnerError>;
}

/// tokio::process 기반 스크립트 실행기
///
/// - 실행 시간 제한 (초과 시 프로세스 kill)
/// - Semaphore로 동시 실행 수 제한
/// - stdout/stderr 크기 제한
#[derive(Clone)]
pub struct ScriptRunner {
    interpreter: String,
    scripts_dir: PathBuf,
    timeout: Duration,
    max_output_bytes: usize,
    permits: Arc<Semaphore>,
}

impl ScriptRunner {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            interpreter: config.interpreter.clone(),
            scripts_dir: config.scripts_dir.clone(),
            timeout: config.timeout,
            max_output_bytes: config.max_output_bytes,
            permits: Arc::new(Semaphore::new(config.max_concurrent)),
        }
    }

    /// 현재 사용 가능한 실행 슬롯 수
    pub fn available_slots(&self) -> usize {
        self.permits.available_permits()
    }

    async fn execute(&self, script: Script, args: Vec<String>) -> Result<serde_json::Value, RunnerError> {
        let name = script.file_name();
        let limit = self.max_output_bytes;

        let mut child = Command::new(&self.interpreter)
            .arg(self.scripts_dir.join(name))
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunnerError::Spawn { script: name, source })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // 한쪽 스트림이 limit를 넘으면 즉시 중단 후 kill
        let (stdout, stderr) = match tokio::try_join!(read_bounded(stdout, limit), read_bounded(stderr, limit)) {
            Ok(output) => output,
            Err(StreamError::TooLarge) => {
                let _ = child.start_kill();
                return Err(RunnerError::OutputTooLarge { script: name, limit });
            }
            Err(StreamError::Io(source)) => {
                let _ = child.start_kill();
                return Err(RunnerError::Io { script: name, source });
            }
        };

        let status = child
            .wait()
            .await
            .map_err(|source| RunnerError::Io { script: name, source })?;

        // 공백/개행만 있어도 실패
        if !stderr.is_empty() {
            return Err(RunnerError::Stderr {
                script: name,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        if !status.success() {
            return Err(RunnerError::ExitStatus { script: name, code: status.code() });
        }

        serde_json::from_slice(&stdout).map_err(|source| RunnerError::InvalidJson { script: name, source })
    }
}

#[async_trait]
impl AnalysisRunner for ScriptRunner {
    async fn run(&self, script: Script, args: Vec<String>) -> Result<serde_json::Value, RunnerError> {
        let _permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| RunnerError::Closed)?;

        tracing::debug!(script = script.file_name(), ?args, "running external script");

        match tokio::time::timeout(self.timeout, self.execute(script, args)).await {
            Ok(result) => result,
            // future가 drop되면서 kill_on_drop으로 자식 프로세스 종료
            Err(_) => Err(RunnerError::Timeout {
                script: script.file_name(),
                timeout: self.timeout,
            }),
        }
    }
}

enum StreamError {
    TooLarge,
    Io(std::io::Error),
}

/// EOF까지 읽되 limit를 넘는 순간 TooLarge
async fn read_bounded<R>(reader: Option<R>, limit: usize) -> Result<Vec<u8>, StreamError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let Some(mut reader) = reader else {
        return Ok(buf);
    };

    let mut chunk = [0u8; 8192];
    loop {
        let n = reader.read(&mut chunk).await.map_err(StreamError::Io)?;
        if n == 0 {
            return Ok(buf);
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > limit {
            return Err(StreamError::TooLarge);
        }
    }
}
