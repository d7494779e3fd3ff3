//! GitHub repository listing.
//!
//! The projects grid is filled from a single unauthenticated request:
//!
//! ```text
//! GET https://api.github.com/users/{username}/repos?sort=updated&per_page=100
//! ```
//!
//! Sorting is delegated to the API; nothing here re-sorts. Only the first
//! page is read. Rate limiting is not detected specially: a 403 is just
//! another [`FetchError::Status`].
//!
//! [`RepoSource`] is the seam between the page logic and the network, so the
//! renderer can be driven by a scripted source in tests.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const API_BASE: &str = "https://api.github.com";

/// Items requested from the listing endpoint. Later pages are never fetched.
pub const PER_PAGE: u32 = 100;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("GitHub API returned status {0}")]
    Status(u16),
    #[error("malformed repository list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry of the repository listing. Only the fields the page uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Anything that can list a user's repositories, most recently updated first.
#[async_trait]
pub trait RepoSource {
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError>;
}

/// Listing URL for `username` under `base` (no trailing slash).
pub fn repos_url(base: &str, username: &str) -> String {
    format!("{base}/users/{username}/repos?sort=updated&per_page={PER_PAGE}")
}

/// [`RepoSource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(API_BASE)
    }

    /// Point the client at a different API root, e.g. a mirror or a local stub.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        // GitHub rejects requests without a User-Agent.
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("simple-folio/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = Client::builder().default_headers(headers).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let url = repos_url(&self.base_url, username);
        debug!(%url, "fetching repositories");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let repos: Vec<Repository> = serde_json::from_slice(&body)?;
        debug!(count = repos.len(), "received repositories");
        Ok(repos)
    }
}
