// Shared errors
pub mod auth_error;
pub mod trading_error;

pub use auth_error::*;
pub use trading_error::*;
