// tests/run_e2e.rs
mod common;

use std::fs;
use std::path::PathBuf;

use common::FIXTURE;
use team_sheet::config::options::{AppOptions, Source};
use team_sheet::progress::Progress;
use team_sheet::{file, runner, Error};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("team_sheet_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn saved_page_to_workbook() {
    let dir = tmp_dir("saved_page");
    let page = dir.join("team.html");
    fs::write(&page, FIXTURE).unwrap();
    let out = dir.join("nested").join("sheet.xlsx");

    let mut rec = Recorder::default();
    let summary = runner::run(&Source::HtmlFile(page), &out, Some(&mut rec)).unwrap();

    assert_eq!(summary.path, out);
    assert_eq!(summary.team.mmp, vec!["Alice", "Bob"]);
    let written = fs::read(&out).unwrap();
    assert_eq!(written.len(), summary.bytes);
    assert_eq!(&written[..2], b"PK");

    assert!(rec.finished);
    assert!(rec.lines.iter().any(|l| l.contains("2 game(s), 2 MMP, 1 FMP")));
}

#[test]
fn directory_hint_gets_default_name() {
    let dir = tmp_dir("dir_hint");
    let mut opts = AppOptions::default();
    opts.set_out_path(&format!("{}/", dir.display()));
    assert!(opts.out_path.ends_with("team.xlsx"));
    assert!(opts.out_path.starts_with(&dir));

    // existing directory without the trailing separator
    assert_eq!(file::resolve_out_path(dir.to_str().unwrap()), dir.join("team.xlsx"));
    assert_eq!(file::resolve_out_path("  "), PathBuf::from("team.xlsx"));
}

#[test]
fn page_without_schedule_reports_parse_error() {
    let dir = tmp_dir("no_table");
    let page = dir.join("team.html");
    fs::write(&page, "<html><body><p>nothing here</p></body></html>").unwrap();

    let mut rec = Recorder::default();
    let res = runner::run(&Source::HtmlFile(page), &dir.join("x.xlsx"), Some(&mut rec));
    assert!(matches!(res, Err(Error::Parse(_))));
    assert!(rec.finished, "progress is finished on failure too");
    assert!(!dir.join("x.xlsx").exists());
}

#[test]
fn missing_page_file_is_io_error() {
    let dir = tmp_dir("missing");
    let res = runner::run(&Source::HtmlFile(dir.join("nope.html")), &dir.join("x.xlsx"), None);
    assert!(matches!(res, Err(Error::Io(_))));
}

#[test]
fn output_path_under_a_file_fails() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();
    let err = file::write_workbook(&blocker.join("out.xlsx"), b"PK").unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}
