// Accounts domain models
pub mod account;

pub use account::*;
