mod app;
mod effects;
mod logging;
mod terminal;
mod ui;

pub use app::run_app;
