/// Bot 서비스
/// Bot Services
pub mod bot_service;

pub use bot_service::*;
