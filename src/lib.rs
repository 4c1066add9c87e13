// Library entry so integration tests can reach the handlers and stores.
pub mod commands;
pub mod config;
pub mod database;
pub mod handler;
pub mod model;
pub mod util;

pub use model::AppState;
