// Bot domain models
pub mod bot;
pub mod simulation;

pub use bot::*;
pub use simulation::*;
