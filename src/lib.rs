// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;
pub mod sheet;

pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod web;

pub use data::{Answer, Game, TeamPage};
pub use error::{Error, FetchError, ParseError};
