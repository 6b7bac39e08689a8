use std::fs;
use std::path::Path;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

use crate::context::RunContext;
use crate::error::{Error, Result};

/// One bookmark as returned by `posts/all`. Missing fields become empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub href: String,
    pub description: String,
    pub extended: String,
    pub tags: String,
    pub shared: String,
}

/// Read the API token: a single line, surrounding whitespace ignored.
pub fn read_token(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("cannot read token file {}: {}", path.display(), e))
    })?;
    let token = raw.trim();
    if token.is_empty() {
        return Err(Error::Configuration(format!(
            "token file {} is empty",
            path.display()
        )));
    }
    Ok(token.to_string())
}

/// Fetch every bookmark created within the last `days` days.
pub fn fetch_posts(
    client: &Client,
    endpoint: &str,
    token: &str,
    days: u32,
    ctx: &RunContext,
) -> Result<Vec<RawRecord>> {
    let fromdt = ctx.from_dt(days);
    info!("Fetching bookmarks since {} from {}", fromdt, endpoint);

    // Errors are stripped of their URL since the query string carries the token.
    let response = client
        .get(endpoint)
        .query(&[("auth_token", token), ("format", "json"), ("fromdt", fromdt.as_str())])
        .send()
        .map_err(|e| e.without_url())?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("{} returned {}", endpoint, status)));
    }

    let body = response.text().map_err(|e| e.without_url())?;
    let posts = parse_posts(&body)?;
    info!("Fetched {} bookmarks", posts.len());
    Ok(posts)
}

/// Decode the JSON array body of a `posts/all` response.
pub fn parse_posts(body: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(body)
        .map_err(|e| Error::Network(format!("malformed response body: {}", e)))
}
