mod app;
mod config;
pub mod logging;
mod render;

pub use app::run_app;
