// Trading bot dashboard API
pub mod domains;
pub mod shared;
pub mod routes;
