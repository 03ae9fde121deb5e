pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;

pub use app::{create_app, AppState};
