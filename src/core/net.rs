// src/core/net.rs

// Blocking GET; callers on an async runtime must hop to a blocking thread.

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

pub fn http_get(url: &str) -> Result<String, FetchError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let resp = client.get(url).send()?;

    let status = resp.status();
    if status != StatusCode::OK {
        loge!("Fetch: HTTP {} {}", status.as_u16(), url);
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp.text()?;
    logf!("Fetch: OK {} ({} bytes)", url, body.len());
    Ok(body)
}
