pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod telemetry;

#[cfg(test)]
mod api_tests;
