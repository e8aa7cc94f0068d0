// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector(format!("{css}: {e:?}")))
}

/// First element matching `css` anywhere in the document.
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>, ParseError> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).next())
}

/// Element by `id` attribute. Ids are matched literally, no CSS escaping needed.
pub fn by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().id() == Some(id))
}

/// All text under `el`, concatenated, untrimmed. Line breaks survive so the
/// caller can split on them.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `colspan` attribute; anything missing or unparsable counts as 1.
pub fn colspan(el: ElementRef<'_>) -> usize {
    el.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

