pub mod app;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod ui;

pub use app::router;
pub use config::resolve_addr;
pub use form::{CalorieForm, Field, Outcome};
