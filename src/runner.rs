// src/runner.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::options::Source,
    data::TeamPage,
    error::Result,
    file,
    progress::Progress,
    scrape, sheet,
};

/// What a run produced.
pub struct RunSummary {
    pub path: PathBuf,
    pub team: TeamPage,
    pub bytes: usize,
}

/// Read the team page from wherever `source` points.
pub fn load(source: &Source) -> Result<TeamPage> {
    match source {
        Source::Url(url) => scrape::extract(url),
        Source::HtmlFile(path) => {
            let html = fs::read_to_string(path)?;
            Ok(scrape::extract_from_html(&html)?)
        }
    }
}

/// Fetch → build → serialize. Used by the web handler.
pub fn generate(url: &str) -> Result<Vec<u8>> {
    let team = scrape::extract(url)?;
    Ok(sheet::build_bytes(&team)?)
}

/// Fetch → build → write to `out_path`.
pub fn run(
    source: &Source,
    out_path: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let res = run_inner(source, out_path, progress.as_deref_mut());
    if let Err(e) = &res {
        loge!("Run: {} failed: {}", source.describe(), e);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res
}

fn run_inner(
    source: &Source,
    out_path: &Path,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", source.describe()));
    }
    let team = load(source)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Found {} game(s), {} MMP, {} FMP",
            team.schedule.len(),
            team.mmp.len(),
            team.fmp.len()
        ));
    }

    let (path, bytes) = save(&team, out_path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", path.display()));
    }

    Ok(RunSummary { path, team, bytes })
}

/// Build the workbook for an already-extracted page and write it out.
pub fn save(team: &TeamPage, out_path: &Path) -> Result<(PathBuf, usize)> {
    let bytes = sheet::build_bytes(team)?;
    let path = file::write_workbook(out_path, &bytes)?;
    logf!("Save: {} ({} bytes)", path.display(), bytes.len());
    Ok((path, bytes.len()))
}
