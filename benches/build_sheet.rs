// benches/build_sheet.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use team_sheet::{
    scrape::extract_from_html,
    sheet::{self, SheetPlan},
    Game, TeamPage,
};

const PAGE: &str = include_str!("../tests/fixtures/team_page.html");

fn season() -> TeamPage {
    let schedule = (0..24)
        .map(|i| Game {
            date: format!("Sat Week {i}"),
            time: "6:30 PM".into(),
            field: "Magnuson #7".into(),
            jersey: if i % 2 == 0 { "Dark".into() } else { "Light".into() },
            opponent: format!("Opponent {i}"),
        })
        .collect();
    TeamPage {
        schedule,
        mmp: (0..14).map(|i| format!("Man {i}")).collect(),
        fmp: (0..10).map(|i| format!("Woman {i}")).collect(),
    }
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("extract_fixture", |b| {
        b.iter(|| {
            let team = extract_from_html(black_box(PAGE)).unwrap();
            black_box(team.schedule.len())
        })
    });

    let team = season();
    c.bench_function("plan_season", |b| {
        b.iter(|| {
            let plan = SheetPlan::new(black_box(&team));
            black_box(plan.cells.len())
        })
    });

    c.bench_function("build_bytes_season", |b| {
        b.iter(|| {
            let bytes = sheet::build_bytes(black_box(&team)).unwrap();
            black_box(bytes.len())
        })
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
