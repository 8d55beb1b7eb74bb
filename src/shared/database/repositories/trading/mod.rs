// Trading repositories
pub mod account_repository;
pub mod api_key_repository;
pub mod bot_repository;
pub mod notification_repository;
pub mod simulation_repository;
pub mod analysis_repository;

pub use account_repository::*;
pub use api_key_repository::*;
pub use bot_repository::*;
pub use notification_repository::*;
pub use simulation_repository::*;
pub use analysis_repository::*;
