// src/sheet/render.rs
use rust_xlsxwriter::{
    ConditionalFormatCell, ConditionalFormatCellRule, ConditionalFormatFormula, DataValidation,
    Workbook, XlsxError,
};

use crate::config::consts::SHEET_NAME;
use crate::data::Answer;

use super::plan::{CellStyle, CellValue, SheetPlan};
use super::style::Styles;

/// Write `plan` into a fresh single-sheet workbook.
/// The plan is 1-based; rust_xlsxwriter is 0-based.
pub fn render(plan: &SheetPlan) -> Result<Workbook, XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (&(row, col), cell) in &plan.cells {
        let (r, c) = (row - 1, col - 1);
        match (&cell.value, cell.style) {
            (CellValue::Text(s), CellStyle::Label) => {
                sheet.write_string_with_format(r, c, s, &styles.label)?;
            }
            (CellValue::Text(s), CellStyle::Plain) => {
                sheet.write_string(r, c, s)?;
            }
            (CellValue::Formula(f), _) => {
                sheet.write_formula(r, c, f.as_str())?;
            }
            (CellValue::Number(n), _) => {
                sheet.write_number(r, c, *n)?;
            }
        }
    }

    let dropdown = DataValidation::new().allow_list_strings(&Answer::ALL.map(Answer::label))?;
    for block in &plan.answer_blocks {
        let rect = block.rect;
        let (r0, c0, r1, c1) = (rect.first_row - 1, rect.first_col - 1, rect.last_row - 1, rect.last_col - 1);

        sheet.add_data_validation(r0, c0, r1, c1, &dropdown)?;

        for h in &block.highlights {
            let cf = ConditionalFormatFormula::new()
                .set_rule(h.rule.as_str())
                .set_format(styles.for_answer(h.answer));
            sheet.add_conditional_format(r0, c0, r1, c1, &cf)?;
        }
    }

    let t = plan.threshold;
    let (tr, tc) = (t.row - 1, t.col - 1);
    let below = ConditionalFormatCell::new()
        .set_rule(ConditionalFormatCellRule::LessThan(t.min))
        .set_format(&styles.warning);
    let at_least = ConditionalFormatCell::new()
        .set_rule(ConditionalFormatCellRule::GreaterThanOrEqualTo(t.min))
        .set_format(&styles.success);
    sheet.add_conditional_format(tr, tc, tr, tc, &below)?;
    sheet.add_conditional_format(tr, tc, tr, tc, &at_least)?;

    for (col, width) in (0u16..).zip(&plan.widths) {
        sheet.set_column_width(col, *width as f64)?;
    }

    sheet.set_freeze_panes(plan.freeze_row - 1, 0)?;

    logd!(
        "Render: cells={} widths={} freeze_row={}",
        plan.cells.len(),
        plan.widths.len(),
        plan.freeze_row
    );
    Ok(workbook)
}
