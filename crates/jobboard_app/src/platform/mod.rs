//! Terminal front-end: argument parsing, the input loop, effects and persistence.
mod app;
mod cli;
mod effects;
mod persistence;
mod ui;

pub use app::run_app;
