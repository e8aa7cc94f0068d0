// src/sheet/mod.rs
//! Workbook builder: schedule + rosters in, attendance workbook out.
pub mod formula;
pub mod layout;
pub mod plan;
pub mod render;
pub mod style;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::data::TeamPage;

pub use layout::{Layout, RowSpan};
pub use plan::SheetPlan;

/// Lay out and render the attendance workbook for `team`.
pub fn build(team: &TeamPage) -> Result<Workbook, XlsxError> {
    let plan = SheetPlan::new(team);
    logf!(
        "Build: games={} players={} mixed={} rows={}..{}",
        plan.layout.games,
        plan.layout.player_count(),
        plan.layout.mixed,
        plan.layout.player_start_row(),
        plan.layout.player_end_row()
    );
    render::render(&plan)
}

/// [`build`], serialized to xlsx bytes.
pub fn build_bytes(team: &TeamPage) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build(team)?;
    workbook.save_to_buffer()
}
