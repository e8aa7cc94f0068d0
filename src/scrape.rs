// src/scrape.rs
use scraper::Html;

use crate::{
    config::consts::{MEN_PANEL_ID, WOMEN_PANEL_ID},
    core::net,
    data::TeamPage,
    error::{ParseError, Result},
    specs,
};

/// Fetch `url` and pull out the schedule and both rosters.
pub fn extract(url: &str) -> Result<TeamPage> {
    let html = net::http_get(url)?;
    Ok(extract_from_html(&html)?)
}

/// Same as [`extract`] for a page already in memory.
pub fn extract_from_html(html: &str) -> std::result::Result<TeamPage, ParseError> {
    let doc = Html::parse_document(html);

    let raw = specs::schedule::read_table(&doc)?;
    let schedule = specs::schedule::to_games(&raw)?;

    let mmp = specs::roster::read_panel(&doc, MEN_PANEL_ID)?;
    let fmp = specs::roster::read_panel(&doc, WOMEN_PANEL_ID)?;

    logf!(
        "Extract: games={} mmp={} fmp={}",
        schedule.len(),
        mmp.len(),
        fmp.len()
    );
    Ok(TeamPage { schedule, mmp, fmp })
}
