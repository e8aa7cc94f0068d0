// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, Source};
use crate::progress::StderrProgress;
use crate::runner;

pub const HELP: &str = include_str!("cli_help.txt");

/// Parse arguments (program name already skipped). `Ok(None)` means help was asked for.
pub fn parse_args<I>(args: I) -> Result<Option<AppOptions>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                set_source(&mut opts, Source::Url(v))?;
            }
            "--html" => {
                let v = args.next().ok_or("Missing value for --html")?;
                set_source(&mut opts, Source::HtmlFile(PathBuf::from(v)))?;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.set_out_path(&v);
            }
            "--bind" => opts.bind = args.next().ok_or("Missing value for --bind")?,
            "-h" | "--help" => return Ok(None),
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            _ => set_source(&mut opts, Source::Url(a))?,
        }
    }
    Ok(Some(opts))
}

fn set_source(opts: &mut AppOptions, source: Source) -> Result<(), Box<dyn Error>> {
    if let Some(prev) = &opts.source {
        return Err(format!("Source given twice: {} and {}", prev.describe(), source.describe()).into());
    }
    opts.source = Some(source);
    Ok(())
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let Some(opts) = parse_args(env::args().skip(1))? else {
        eprintln!("{HELP}");
        return Ok(());
    };
    let source = opts.source.clone().ok_or("Specify a team page URL or --html <file>")?;

    if let Source::Url(url) = &source {
        crate::web::clean_url(url)?;
    }

    let summary = runner::run(&source, &opts.out_path, Some(&mut StderrProgress))?;
    println!("Wrote {} ({} bytes)", summary.path.display(), summary.bytes);
    Ok(())
}
