// src/specs/schedule.rs

use std::iter;

use scraper::Html;

use crate::config::consts::SCHEDULE_TABLE;
use crate::core::html::{colspan, element_text, select_first, selector};
use crate::core::sanitize::{first_line, normalize_ws, opponent_name, split_when};
use crate::data::{Game, RawTable};
use crate::error::ParseError;

pub const COL_WHEN: &str = "When";
pub const COL_FIELD: &str = "Field";
pub const COL_OPPONENT: &str = "Opponent";
pub const COL_JERSEY: &str = "Jersey";

/// Read the schedule grid as-is.
///
/// Headers come from the `<th>` cells of the first row. Every later row
/// contributes one string per `<td>`/`<th>`; a cell with `colspan=N` is
/// followed by `N-1` empty strings so columns stay aligned.
pub fn read_table(doc: &Html) -> Result<RawTable, ParseError> {
    let table = select_first(doc, SCHEDULE_TABLE)?.ok_or(ParseError::MissingTable)?;

    let tr = selector("tr")?;
    let th = selector("th")?;
    let cell = selector("td, th")?;

    let mut rows = table.select(&tr);
    let header_row = rows.next().ok_or(ParseError::MissingHeaders)?;
    let headers: Vec<String> = header_row
        .select(&th)
        .map(|h| normalize_ws(&element_text(h)))
        .collect();
    if headers.is_empty() {
        return Err(ParseError::MissingHeaders);
    }

    let mut data = Vec::new();
    for row in rows {
        let mut cells = Vec::with_capacity(headers.len());
        for c in row.select(&cell) {
            cells.push(element_text(c).trim().to_string());
            cells.extend(iter::repeat_n(s!(), colspan(c) - 1));
        }
        if cells.is_empty() { continue; }
        data.push(cells);
    }

    let raw = RawTable { headers, rows: data };
    logd!("Schedule: {} header(s), {} row(s)", raw.header_count(), raw.row_count());
    Ok(raw)
}

/// Map raw rows onto [`Game`]s. `When`, `Field`, `Opponent` and `Jersey` must
/// all be present as headers; `Date`/`Time` are always derived from `When`.
pub fn to_games(raw: &RawTable) -> Result<Vec<Game>, ParseError> {
    let idx = |name: &'static str| raw.column_index(name).ok_or(ParseError::MissingColumn(name));
    let when = idx(COL_WHEN)?;
    let field = idx(COL_FIELD)?;
    let opponent = idx(COL_OPPONENT)?;
    let jersey = idx(COL_JERSEY)?;

    let games = raw
        .rows
        .iter()
        .map(|row| {
            let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
            let (date, time) = split_when(cell(when));
            Game {
                date,
                time,
                field: first_line(cell(field)),
                jersey: cell(jersey).trim().to_string(),
                opponent: opponent_name(cell(opponent)),
            }
        })
        .collect();
    Ok(games)
}
