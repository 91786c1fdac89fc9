//! GitHub contents API client.
//!
//! The handover workbook lives in a private repository; a single GET against
//! the contents endpoint returns its metadata plus the base64-encoded file
//! body.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use base64::Engine;
use serde::Deserialize;

const API_ROOT: &str = "https://api.github.com";
const ACCEPT_CONTENTS: &str = "application/vnd.github.v3+json";

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    #[serde(default)]
    encoding: String,
}

pub fn contents_url(owner: &str, repo: &str, path: &str) -> String {
    format!("{API_ROOT}/repos/{owner}/{repo}/contents/{path}")
}

/// Fetch the raw workbook bytes. Requires the four remote coordinates to be
/// configured; the first missing one is named in the error.
pub fn fetch_workbook(cfg: &Config) -> AppResult<Vec<u8>> {
    cfg.require_remote()?;

    let url = contents_url(&cfg.repo_owner, &cfg.repo_name, &cfg.file_path);
    log::debug!("GET {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("bitacora/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(&url)
        .header("Authorization", format!("token {}", cfg.token))
        .header("Accept", ACCEPT_CONTENTS)
        .send()?;

    let status = response.status();
    log::debug!("GitHub answered {status}");

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(AppError::RemoteNotFound);
    }
    if !status.is_success() {
        return Err(AppError::RemoteAccess(status.as_u16()));
    }

    let body: ContentsResponse = response.json()?;

    if !body.encoding.is_empty() && body.encoding != "base64" {
        return Err(AppError::RemoteResponse(format!(
            "unsupported content encoding '{}'",
            body.encoding
        )));
    }

    decode_base64_content(&body.content)
}

/// Decode the `content` field of a contents response. GitHub wraps the
/// base64 payload in newlines, so all whitespace is stripped first.
pub fn decode_base64_content(content: &str) -> AppResult<Vec<u8>> {
    let compact: String = content.split_whitespace().collect();

    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| AppError::RemoteResponse(format!("invalid base64 content: {e}")))
}
