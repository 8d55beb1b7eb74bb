// Auth domain services
pub mod auth_service;
pub mod jwt_service;
pub mod session_cookie;
pub mod state;

pub use auth_service::*;
pub use jwt_service::*;
pub use session_cookie::*;
pub use state::*;
