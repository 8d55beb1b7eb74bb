use crate::shared::errors::TradingError;

/// 스크립트 인자로 넘길 수 있는 최대 길이
pub const MAX_ARGUMENT_LEN: usize = 32;

/// 심볼/interval/range 형식 검사: [A-Za-z0-9][A-Za-z0-9._/-]{0,31}
/// Values that reach the external runner as positional arguments; never option-like
pub fn is_safe_argument(value: &str) -> bool {
    value.len() <= MAX_ARGUMENT_LEN
        && value.starts_with(|c: char| c.is_ascii_alphanumeric())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '/' | '-'))
}

/// 형식이 맞지 않으면 400
pub fn require_safe_argument(field: &str, value: &str) -> Result<(), TradingError> {
    if is_safe_argument(value) {
        Ok(())
    } else {
        Err(TradingError::Validation(format!("Invalid {}", field)))
    }
}

/// 필수 문자열 필드 (공백만 있으면 누락으로 취급)
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
