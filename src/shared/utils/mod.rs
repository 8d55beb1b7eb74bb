/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 외부 스크립트 인자 / 요청 필드 검증
pub mod validation;

pub use validation::*;
