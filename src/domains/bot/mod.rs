/// Bot 모듈
/// Bot Module
/// 
/// 역할:
/// - 계정 + 거래쌍 단위의 봇 설정 저장 (upsert)
/// - 봇 시작/정지 및 시스템 알림 생성
/// - 외부 전략 엔진을 통한 시뮬레이션 실행 및 결과 저장
/// 
/// 구조:
/// - `services/bot_service.rs`: 설정/제어/시뮬레이션 비즈니스 로직
/// - `handlers/bot_handler.rs`: HTTP 핸들러
/// - `models/bot.rs`, `models/simulation.rs`: 요청/응답 및 DB row 모델
pub mod models;
pub mod services;
pub mod handlers;
pub mod routes;
