// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the team page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// A page saved to disk; skips the network entirely.
    HtmlFile(PathBuf),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::HtmlFile(path) => path.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: Option<Source>,
    pub out_path: PathBuf,
    pub bind: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: None,
            out_path: PathBuf::from(DEFAULT_FILE),
            bind: s!(DEFAULT_BIND),
        }
    }
}

impl AppOptions {
    /// Accepts a file or a directory hint (`out/`); directories get `team.xlsx`.
    pub fn set_out_path(&mut self, text: &str) {
        self.out_path = crate::file::resolve_out_path(text);
    }
}
