// src/sheet/layout.rs
//! Row/column bookkeeping for the attendance sheet.
//!
//! ```text
//!  non-mixed                 mixed (both rosters)
//!  1-5  Date..Opponent       1-5  Date..Opponent
//!  6    Total                6    Total
//!  7..  names                7    MMP Total
//!                            8    FMP Total
//!                            9    MMP
//!                            10.. MMP names
//!                                 (blank)
//!                                 FMP
//!                                 FMP names
//! ```
//! Columns: A holds labels/names, B.. one per game.

use std::ops::RangeInclusive;

pub const HEADER_ROWS: u32 = 5;
pub const TOTAL_ROW: u32 = HEADER_ROWS + 1;
pub const LABEL_COL: u16 = 1;
pub const FIRST_GAME_COL: u16 = 2;

/// Inclusive run of rows. Empty when `last < first`; an empty span still
/// remembers where it would have started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpan {
    pub first: u32,
    pub last: u32,
}

impl RowSpan {
    pub fn new(first: u32, len: usize) -> Self {
        Self { first, last: first + len as u32 - 1 }
    }

    pub fn len(&self) -> usize {
        if self.last < self.first { 0 } else { (self.last - self.first + 1) as usize }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn contains(&self, row: u32) -> bool { self.first <= row && row <= self.last }

    pub fn rows(&self) -> RangeInclusive<u32> { self.first..=self.last }

    /// Row right after the span (start of the span itself when empty).
    fn next_row(&self) -> u32 { self.last + 1 }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub games: usize,
    pub mixed: bool,
    pub total_row: u32,
    pub mmp_total_row: Option<u32>,
    pub fmp_total_row: Option<u32>,
    pub mmp_label_row: Option<u32>,
    pub fmp_label_row: Option<u32>,
    pub mmp_rows: RowSpan,
    pub fmp_rows: RowSpan,
    /// Name blocks, MMP first; empty rosters contribute none. Every
    /// range-based formula and rule is written over these.
    pub players: Vec<RowSpan>,
    /// First to last name row. In mixed mode the separator and "FMP" label
    /// sit inside, so this is a bound, not a range to write over.
    pub bounds: RowSpan,
    /// First row that scrolls.
    pub freeze_row: u32,
}

impl Layout {
    pub fn new(games: usize, mmp: usize, fmp: usize) -> Self {
        let mixed = mmp > 0 && fmp > 0;
        let total_row = TOTAL_ROW;

        if mixed {
            let mmp_total_row = total_row + 1;
            let fmp_total_row = total_row + 2;
            let mmp_label_row = fmp_total_row + 1;
            let mmp_rows = RowSpan::new(mmp_label_row + 1, mmp);
            // one blank row, then the label
            let fmp_label_row = mmp_rows.next_row() + 1;
            let fmp_rows = RowSpan::new(fmp_label_row + 1, fmp);

            Self {
                games,
                mixed,
                total_row,
                mmp_total_row: Some(mmp_total_row),
                fmp_total_row: Some(fmp_total_row),
                mmp_label_row: Some(mmp_label_row),
                fmp_label_row: Some(fmp_label_row),
                mmp_rows,
                fmp_rows,
                players: vec![mmp_rows, fmp_rows],
                bounds: RowSpan { first: mmp_rows.first, last: fmp_rows.last },
                freeze_row: fmp_total_row + 1,
            }
        } else {
            let start = total_row + 1;
            let mmp_rows = RowSpan::new(start, mmp);
            let fmp_rows = RowSpan::new(mmp_rows.next_row(), fmp);

            Self {
                games,
                mixed,
                total_row,
                mmp_total_row: None,
                fmp_total_row: None,
                mmp_label_row: None,
                fmp_label_row: None,
                mmp_rows,
                fmp_rows,
                players: [mmp_rows, fmp_rows].into_iter().filter(|r| !r.is_empty()).collect(),
                bounds: RowSpan::new(start, mmp + fmp),
                freeze_row: total_row + 1,
            }
        }
    }

    pub fn player_start_row(&self) -> u32 { self.bounds.first }
    pub fn player_end_row(&self) -> u32 { self.bounds.last }

    /// Number of name rows (labels and the blank separator excluded).
    pub fn player_count(&self) -> usize { self.players.iter().map(RowSpan::len).sum() }

    /// Column A when there are no games.
    pub fn last_game_col(&self) -> u16 {
        (FIRST_GAME_COL as usize + self.games - 1).min(u16::MAX as usize) as u16
    }

    /// Empty when there are no games.
    pub fn game_cols(&self) -> RangeInclusive<u16> {
        FIRST_GAME_COL..=self.last_game_col()
    }

    /// Name rows, MMP first.
    pub fn name_rows(&self) -> impl Iterator<Item = u32> + '_ {
        self.players.iter().flat_map(RowSpan::rows)
    }
}
