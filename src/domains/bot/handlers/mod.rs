// Bot domain handlers
pub mod bot_handler;

pub use bot_handler::*;
