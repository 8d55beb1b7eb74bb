// Market domain module
// 분석/시세는 외부 스크립트에 위임
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;
