// Domain modules
pub mod auth;
pub mod accounts;
pub mod bot;
pub mod market;
pub mod notifications;
pub mod dashboard;
