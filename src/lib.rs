pub mod app_state;
pub mod auth;
pub mod coerce;
pub mod db;
pub mod error;
pub mod handlers;
pub mod records;
pub mod routes;
