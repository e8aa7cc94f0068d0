// src/gui/mod.rs
pub mod app;
pub mod preview;
pub mod progress;

pub use app::run;
