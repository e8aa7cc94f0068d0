// src/specs/roster.rs

use scraper::Html;

use crate::core::html::{by_id, element_text, selector};
use crate::core::sanitize::roster_name;
use crate::error::ParseError;

/// Names from the first `<ol>` inside the element with `panel_id`.
/// No panel or no list → empty roster.
pub fn read_panel(doc: &Html, panel_id: &str) -> Result<Vec<String>, ParseError> {
    let Some(panel) = by_id(doc, panel_id) else {
        logd!("Roster: no panel #{}", panel_id);
        return Ok(Vec::new());
    };

    let ol = selector("ol")?;
    let Some(list) = panel.select(&ol).next() else {
        logd!("Roster: panel #{} has no list", panel_id);
        return Ok(Vec::new());
    };

    let li = selector("li")?;
    Ok(list
        .select(&li)
        .map(|item| roster_name(&element_text(item)))
        .collect())
}
