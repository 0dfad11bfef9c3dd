mod app;
mod config;
mod render;

pub use app::run_app;
