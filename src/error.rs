// src/error.rs
use thiserror::Error;

/// The page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// The page was retrieved but does not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bad selector {0}")]
    Selector(String),

    #[error("schedule table not found")]
    MissingTable,

    #[error("schedule table has no header row")]
    MissingHeaders,

    #[error("schedule table has no {0:?} column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
