// src/web.rs
//! The single-field web form. `GET /` shows it, `POST /` answers with either
//! the form again (bad input, failed scrape) or `team.xlsx`.

use axum::{
    extract::Form,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use reqwest::Url;
use serde::Deserialize;

use crate::config::consts::{DEFAULT_FILE, XLSX_MIME};
use crate::error::Error;
use crate::runner;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamForm {
    #[serde(default)]
    pub team_name: String,
}

/// Trimmed http(s) URL, or the message to show next to the field.
pub fn clean_url(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(s!("This field is required."));
    }
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(s!(raw)),
        _ => Err(s!("Enter a valid URL.")),
    }
}

pub fn router() -> Router {
    Router::new().route("/", get(show_form).post(submit))
}

pub async fn serve(bind: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    logf!("Web: listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await
}

async fn show_form() -> Html<String> {
    Html(render_form("", None))
}

async fn submit(Form(form): Form<TeamForm>) -> Response {
    let url = match clean_url(&form.team_name) {
        Ok(url) => url,
        Err(msg) => {
            logd!("Web: rejected input {:?}: {}", form.team_name, msg);
            return Html(render_form(&form.team_name, Some(&msg))).into_response();
        }
    };

    logf!("Web: generate {}", url);
    let job_url = url.clone();
    match tokio::task::spawn_blocking(move || runner::generate(&job_url)).await {
        Ok(Ok(bytes)) => download(bytes),
        Ok(Err(e)) => {
            loge!("Web: {} failed: {}", url, e);
            let msg = format!("Could not build a sheet from that page: {e}");
            (status_for(&e), Html(render_form(&url, Some(&msg)))).into_response()
        }
        Err(e) => {
            loge!("Web: worker for {} died: {}", url, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render_form(&url, Some("Internal error.")))).into_response()
        }
    }
}

fn download(bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename={DEFAULT_FILE}");
    (
        [
            (header::CONTENT_TYPE, s!(XLSX_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

pub fn status_for(e: &Error) -> StatusCode {
    match e {
        Error::Fetch(_) => StatusCode::BAD_GATEWAY,
        Error::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Workbook(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn render_form(value: &str, error: Option<&str>) -> String {
    let error_html = error
        .map(|m| format!(r#"<ul class="errorlist"><li>{}</li></ul>"#, escape_html(m)))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Team sheet</title></head>
<body>
<h1>Team attendance sheet</h1>
<form method="post" action="/">
{error_html}
<label for="id_team_name">Team page URL:</label>
<input type="text" name="team_name" id="id_team_name" value="{value}" required>
<button type="submit">Download</button>
</form>
</body>
</html>
"#,
        value = escape_html(value),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
