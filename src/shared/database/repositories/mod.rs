// All repositories module
pub mod auth;
pub mod trading;

// Re-export all repositories for convenience
pub use auth::*;
pub use trading::*;
