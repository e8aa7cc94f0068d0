// tests/common/mod.rs
#![allow(dead_code)]

use proptest::prelude::*;
use team_sheet::{Game, TeamPage};

pub const FIXTURE: &str = include_str!("../fixtures/team_page.html");

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn game(date: &str, opponent: &str) -> Game {
    Game {
        date: date.into(),
        time: "6:30 PM".into(),
        field: "Magnuson".into(),
        jersey: "Dark".into(),
        opponent: opponent.into(),
    }
}

/// `=COUNTIF(B10:B14,"Yes")` → ("B", 10, 14)
pub fn countif_span(formula: &str) -> (String, u32, u32) {
    let inner = formula.strip_prefix("=COUNTIF(").expect("COUNTIF formula");
    let (range, rest) = inner.split_once(',').expect("criterion");
    assert_eq!(rest, "\"Yes\")");
    let (a, b) = range.split_once(':').expect("range");
    let split = |r: &str| {
        let i = r.find(|c: char| c.is_ascii_digit()).expect("row number");
        (r[..i].to_string(), r[i..].parse::<u32>().expect("row"))
    };
    let (col_a, row_a) = split(a);
    let (col_b, row_b) = split(b);
    assert_eq!(col_a, col_b, "range spans a single column");
    (col_a, row_a, row_b)
}

pub fn game_strategy() -> impl Strategy<Value = Game> {
    (
        "[A-Za-z0-9 ]{0,10}",
        "[0-9:APM ]{0,7}",
        "[A-Za-z #0-9]{0,14}",
        "(Dark|Light|)",
        "[A-Za-z ]{0,12}",
    )
        .prop_map(|(date, time, field, jersey, opponent)| Game { date, time, field, jersey, opponent })
}

pub fn team_strategy() -> impl Strategy<Value = TeamPage> {
    (
        prop::collection::vec(game_strategy(), 0..8),
        prop::collection::vec("[A-Z][a-z]{0,9}", 0..7),
        prop::collection::vec("[A-Z][a-z]{0,9}", 0..7),
    )
        .prop_map(|(schedule, mmp, fmp)| TeamPage { schedule, mmp, fmp })
}
