// tests/formula.rs
use team_sheet::sheet::formula::{cell_ref, col_name, countif, countif_spans, equals_text, quote, range_ref};
use team_sheet::sheet::RowSpan;

#[test]
fn column_letters() {
    assert_eq!(col_name(1), "A");
    assert_eq!(col_name(2), "B");
    assert_eq!(col_name(26), "Z");
    assert_eq!(col_name(27), "AA");
    assert_eq!(col_name(52), "AZ");
    assert_eq!(col_name(53), "BA");
    assert_eq!(col_name(702), "ZZ");
    assert_eq!(col_name(703), "AAA");
}

#[test]
fn refs() {
    assert_eq!(cell_ref(6, 2), "B6");
    assert_eq!(range_ref(3, RowSpan { first: 10, last: 14 }), "C10:C14");
    assert_eq!(range_ref(2, RowSpan::new(7, 1)), "B7:B7");
}

#[test]
fn count_and_compare() {
    assert_eq!(countif("B10:B14", "Yes"), r#"=COUNTIF(B10:B14,"Yes")"#);
    assert_eq!(equals_text("B10", "Maybe"), r#"=B10="Maybe""#);
    assert_eq!(quote(r#"say "hi""#), r#""say ""hi""""#);
}

#[test]
fn count_over_split_blocks() {
    let blocks = [RowSpan::new(10, 2), RowSpan::new(7, 0), RowSpan::new(14, 1)];
    assert_eq!(
        countif_spans(2, &blocks, "Yes").as_deref(),
        Some(r#"=COUNTIF(B10:B11,"Yes")+COUNTIF(B14:B14,"Yes")"#)
    );
    assert_eq!(
        countif_spans(3, &blocks[..1], "Yes").as_deref(),
        Some(r#"=COUNTIF(C10:C11,"Yes")"#)
    );
    assert_eq!(countif_spans(2, &[RowSpan::new(7, 0)], "Yes"), None);
    assert_eq!(countif_spans(2, &[], "Yes"), None);
}

#[test]
fn row_span_lengths() {
    let empty = RowSpan::new(7, 0);
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.rows().count(), 0);

    let three = RowSpan::new(10, 3);
    assert_eq!((three.first, three.last), (10, 12));
    assert!(three.contains(12));
    assert!(!three.contains(13));
}
