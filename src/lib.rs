pub mod api;
pub mod app;
pub mod config;
pub mod deletion;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod notice;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use api::{HttpLeadsApi, LeadsApi};
pub use app::router;
pub use config::Config;
pub use state::AppState;
