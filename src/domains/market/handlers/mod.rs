// Market domain handlers
pub mod market_handler;

pub use market_handler::*;
