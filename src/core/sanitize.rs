// src/core/sanitize.rs
//! Text heuristics tied to how the schedule page formats its cells.

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Sat Oct 5\r\n 6:30 PM" → ("Sat Oct 5", "6:30 PM").
/// Blank lines are skipped. No second line → empty time.
pub fn split_when(when: &str) -> (String, String) {
    let mut lines = when.lines().map(str::trim).filter(|l| !l.is_empty());
    let date = lines.next().unwrap_or("").to_string();
    let time = lines.next().unwrap_or("").to_string();
    (date, time)
}

/// "Hucksters (2-1)" → "Hucksters".
pub fn opponent_name(raw: &str) -> String {
    raw.split('(').next().unwrap_or("").trim().to_string()
}

/// First line of a cell, trimmed.
pub fn first_line(raw: &str) -> String {
    raw.trim().lines().next().unwrap_or("").trim().to_string()
}

/// List item text up to the first line break, trimmed. The parser may have
/// already folded `\r\n` into `\n`, so both count.
pub fn roster_name(raw: &str) -> String {
    raw.trim().split(['\r', '\n']).next().unwrap_or("").trim().to_string()
}

