// Accounts domain handlers
pub mod account_handler;

pub use account_handler::*;
