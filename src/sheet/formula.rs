// src/sheet/formula.rs
//! A1-style references and the few formulas the sheet uses.
//! Rows and columns are 1-based throughout.

use super::layout::RowSpan;

/// 1 → "A", 26 → "Z", 27 → "AA".
pub fn col_name(col: u16) -> String {
    debug_assert!(col >= 1, "columns are 1-based");
    let mut n = col as u32;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

pub fn cell_ref(row: u32, col: u16) -> String {
    format!("{}{}", col_name(col), row)
}

/// `B10:B14` for one column over `span`.
pub fn range_ref(col: u16, span: RowSpan) -> String {
    join!(&cell_ref(span.first, col), ":", &cell_ref(span.last, col))
}

/// Double embedded quotes and wrap.
pub fn quote(text: &str) -> String {
    join!("\"", &text.replace('"', "\"\""), "\"")
}

/// `=COUNTIF(B10:B14,"Yes")`
pub fn countif(range: &str, criterion: &str) -> String {
    join!("=", &countif_term(range, criterion))
}

/// `=COUNTIF(B10:B11,"Yes")+COUNTIF(B14:B14,"Yes")`: one term per non-empty
/// span of column `col`. `None` when there is nothing to count.
pub fn countif_spans(col: u16, spans: &[RowSpan], criterion: &str) -> Option<String> {
    let terms: Vec<String> = spans
        .iter()
        .filter(|s| !s.is_empty())
        .map(|&s| countif_term(&range_ref(col, s), criterion))
        .collect();
    (!terms.is_empty()).then(|| join!("=", &terms.join("+")))
}

fn countif_term(range: &str, criterion: &str) -> String {
    format!("COUNTIF({},{})", range, quote(criterion))
}

/// `=B10="Yes"`; relative, so a conditional format copies it across its range.
pub fn equals_text(cell: &str, text: &str) -> String {
    format!("={}={}", cell, quote(text))
}
