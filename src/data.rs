// src/data.rs
//! Shapes passed between the extractor and the workbook builder.

use crate::config::consts::{ANSWER_MAYBE, ANSWER_NO, ANSWER_YES};

/// Table as found on the page: header names plus one `Vec` per data row,
/// already widened for merged cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

/// One scheduled game, after the text heuristics have run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    pub date: String,
    pub time: String,
    pub field: String,
    pub jersey: String,
    pub opponent: String,
}

/// Header rows of the workbook, in the order they are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleColumn {
    Date,
    Time,
    Field,
    Jersey,
    Opponent,
}

impl ScheduleColumn {
    pub const ALL: [ScheduleColumn; 5] = [
        ScheduleColumn::Date,
        ScheduleColumn::Time,
        ScheduleColumn::Field,
        ScheduleColumn::Jersey,
        ScheduleColumn::Opponent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScheduleColumn::Date => "Date",
            ScheduleColumn::Time => "Time",
            ScheduleColumn::Field => "Field",
            ScheduleColumn::Jersey => "Jersey",
            ScheduleColumn::Opponent => "Opponent",
        }
    }
}

impl Game {
    pub fn get(&self, col: ScheduleColumn) -> &str {
        match col {
            ScheduleColumn::Date => &self.date,
            ScheduleColumn::Time => &self.time,
            ScheduleColumn::Field => &self.field,
            ScheduleColumn::Jersey => &self.jersey,
            ScheduleColumn::Opponent => &self.opponent,
        }
    }
}

/// What a player can enter in an answer cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl Answer {
    /// Dropdown order.
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Maybe];

    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => ANSWER_YES,
            Answer::No => ANSWER_NO,
            Answer::Maybe => ANSWER_MAYBE,
        }
    }
}

/// Everything the builder needs from one team page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamPage {
    pub schedule: Vec<Game>,
    /// Men's roster.
    pub mmp: Vec<String>,
    /// Women's roster.
    pub fmp: Vec<String>,
}

impl TeamPage {
    /// Both rosters present: sub-totals and section labels are written.
    pub fn is_mixed(&self) -> bool {
        !self.mmp.is_empty() && !self.fmp.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.mmp.len() + self.fmp.len()
    }
}
