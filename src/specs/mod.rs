// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping rules for the team page: *where the data lives in
//! the HTML* and *how to read it*. Nothing here touches the network or the
//! workbook.
//!
//! ## What lives here
//! - `schedule` – the `.rgMasterTable` grid: header row → column names, data
//!   rows → cells (merged cells widened with empty fillers), then a mapping
//!   step onto typed [`Game`](crate::data::Game) records.
//! - `roster` – the men's/women's panels, located by element id, first `<ol>`
//!   inside, one name per `<li>`.
//!
//! ## Conventions
//! - Missing schedule table is an error (`ParseError`); a missing roster panel
//!   or list is an empty roster.
//! - Text heuristics (date/time split, opponent record, etc.) live in
//!   `core::sanitize` so they can be tested without HTML.
//! - Specs are testable offline against saved pages.
pub mod roster;
pub mod schedule;
