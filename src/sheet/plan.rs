// src/sheet/plan.rs
//! Everything the worksheet will contain, as plain data. Rendering to xlsx is
//! a straight walk over a `SheetPlan`; all layout decisions are made here.

use std::collections::BTreeMap;

use crate::config::consts::{THRESHOLD_COL, THRESHOLD_MIN, THRESHOLD_ROW, WIDTH_PADDING};
use crate::data::{Answer, ScheduleColumn, TeamPage};

use super::formula::{cell_ref, countif_spans, equals_text};
use super::layout::{Layout, RowSpan, FIRST_GAME_COL, LABEL_COL};

#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Formula(String),
    Number(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    /// Column-A headings: schedule field names, totals, section labels.
    Label,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// Inclusive rectangle, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

/// Fill applied when a cell in the block equals `answer`.
/// `rule` is written against the top-left cell of the block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub answer: Answer,
    pub rule: String,
}

/// One roster's name rows × every game column: dropdown plus highlights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerBlock {
    pub rect: Rect,
    pub highlights: Vec<Highlight>,
}

impl AnswerBlock {
    fn new(rect: Rect) -> Self {
        let anchor = cell_ref(rect.first_row, rect.first_col);
        let highlights = Answer::ALL
            .iter()
            .map(|&answer| Highlight { answer, rule: equals_text(&anchor, answer.label()) })
            .collect();
        Self { rect, highlights }
    }
}

/// Below `min` → warning, `min` or more → success. Single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    pub row: u32,
    pub col: u16,
    pub min: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SheetPlan {
    pub layout: Layout,
    pub cells: BTreeMap<(u32, u16), Cell>,
    /// One per non-empty roster; none without games.
    pub answer_blocks: Vec<AnswerBlock>,
    pub threshold: ThresholdRule,
    /// Index 0 is column A.
    pub widths: Vec<usize>,
    pub freeze_row: u32,
}

impl SheetPlan {
    pub fn new(team: &TeamPage) -> Self {
        let layout = Layout::new(team.schedule.len(), team.mmp.len(), team.fmp.len());
        let mut cells = BTreeMap::new();

        // Header block, rows 1-5
        for (row, column) in (1u32..).zip(ScheduleColumn::ALL) {
            put(&mut cells, row, LABEL_COL, label(column.label()));
            for (col, game) in layout.game_cols().zip(&team.schedule) {
                put(&mut cells, row, col, text(game.get(column)));
            }
        }

        // Totals
        put(&mut cells, layout.total_row, LABEL_COL, label("Total"));
        write_counts(&mut cells, &layout, layout.total_row, &layout.players);

        if let (Some(mmp_total), Some(fmp_total)) = (layout.mmp_total_row, layout.fmp_total_row) {
            put(&mut cells, mmp_total, LABEL_COL, label("MMP Total"));
            write_counts(&mut cells, &layout, mmp_total, &[layout.mmp_rows]);
            put(&mut cells, fmp_total, LABEL_COL, label("FMP Total"));
            write_counts(&mut cells, &layout, fmp_total, &[layout.fmp_rows]);
        }
        if let Some(row) = layout.mmp_label_row {
            put(&mut cells, row, LABEL_COL, label("MMP"));
        }
        if let Some(row) = layout.fmp_label_row {
            put(&mut cells, row, LABEL_COL, label("FMP"));
        }

        // Names
        let names = team.mmp.iter().chain(&team.fmp);
        for (row, name) in layout.name_rows().zip(names) {
            put(&mut cells, row, LABEL_COL, text(name));
        }

        let answer_blocks = if layout.games == 0 {
            Vec::new()
        } else {
            layout
                .players
                .iter()
                .map(|span| {
                    AnswerBlock::new(Rect {
                        first_row: span.first,
                        first_col: FIRST_GAME_COL,
                        last_row: span.last,
                        last_col: layout.last_game_col(),
                    })
                })
                .collect()
        };

        let widths = column_widths(&cells, layout.last_game_col());
        let freeze_row = layout.freeze_row;

        Self {
            layout,
            cells,
            answer_blocks,
            threshold: ThresholdRule { row: THRESHOLD_ROW, col: THRESHOLD_COL, min: THRESHOLD_MIN },
            widths,
            freeze_row,
        }
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn text(&self, row: u32, col: u16) -> Option<&str> {
        match self.cell(row, col)?.value {
            CellValue::Text(ref s) => Some(s),
            _ => None,
        }
    }

    pub fn formula(&self, row: u32, col: u16) -> Option<&str> {
        match self.cell(row, col)?.value {
            CellValue::Formula(ref f) => Some(f),
            _ => None,
        }
    }

    /// Occupied cells in `row`, left to right.
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells
            .range((row, 0)..=(row, u16::MAX))
            .map(|(&(_, col), cell)| (col, cell))
    }
}

/* ---------- helpers ---------- */

fn text(s: &str) -> Cell {
    Cell { value: CellValue::Text(s!(s)), style: CellStyle::Plain }
}

fn label(s: &str) -> Cell {
    Cell { value: CellValue::Text(s!(s)), style: CellStyle::Label }
}

fn put(cells: &mut BTreeMap<(u32, u16), Cell>, row: u32, col: u16, cell: Cell) {
    cells.insert((row, col), cell);
}

/// One "Yes" count per game column over the name rows in `spans`; a literal 0
/// when there are none since there is nothing to reference.
fn write_counts(cells: &mut BTreeMap<(u32, u16), Cell>, layout: &Layout, row: u32, spans: &[RowSpan]) {
    for col in layout.game_cols() {
        let value = match countif_spans(col, spans, Answer::Yes.label()) {
            Some(f) => CellValue::Formula(f),
            None => CellValue::Number(0.0),
        };
        put(cells, row, col, Cell { value, style: CellStyle::Plain });
    }
}

/// Longest text per column plus padding. Formulas and numbers don't count.
fn column_widths(cells: &BTreeMap<(u32, u16), Cell>, last_col: u16) -> Vec<usize> {
    let mut widths = vec![0usize; last_col.max(LABEL_COL) as usize];
    for (&(_, col), cell) in cells {
        if let CellValue::Text(ref s) = cell.value {
            let w = &mut widths[(col - 1) as usize];
            *w = (*w).max(s.chars().count());
        }
    }
    widths.into_iter().map(|w| w + WIDTH_PADDING).collect()
}
