// Shared middleware
pub mod auth;
pub mod gate;

pub use auth::*;
pub use gate::*;
