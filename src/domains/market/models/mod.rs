// Market domain models
pub mod market;

pub use market::*;
