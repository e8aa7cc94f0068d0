// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;

/// Write workbook bytes to `path`, creating parent directories.
pub fn write_workbook(path: &Path, bytes: &[u8]) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}

/// Empty → `team.xlsx`; a directory (or `dir/` hint) → `dir/team.xlsx`.
pub fn resolve_out_path(user_o: &str) -> PathBuf {
    if user_o.trim().is_empty() { return PathBuf::from(DEFAULT_FILE); }
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() { p.join(DEFAULT_FILE) } else { p }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
