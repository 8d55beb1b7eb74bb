// Dashboard domain models
pub mod dashboard;

pub use dashboard::*;
