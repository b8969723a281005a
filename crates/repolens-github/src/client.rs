//! Async GitHub REST client.

use crate::error::{GithubError, GithubResult};
use crate::types::{
    GitTreeResponse, ReadmeResponse, Repo, SearchUsersResponse, TreeEntry, UserSuggestion,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use repolens_config::GithubConfig;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT: &str = concat!("repolens/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub REST API and the raw content host.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
    raw_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl GithubClient {
    /// Create a client with explicit base URLs, an optional token, and a
    /// per-request timeout.
    pub fn new(
        api_url: impl Into<String>,
        raw_url: impl Into<String>,
        token: Option<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            raw_url: raw_url.into(),
            token,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create a client from the GitHub config section.
    pub fn from_config(config: &GithubConfig) -> Self {
        Self::new(
            config.api_url(),
            config.raw_url(),
            config.token(),
            config.timeout_secs(),
        )
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {token}"));
        }
        request
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> GithubResult<T> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| GithubError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GithubError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GithubError::InvalidResponse(e.to_string()))
    }

    /// List a user's repositories.
    pub async fn list_repos(&self, username: &str) -> GithubResult<Vec<Repo>> {
        let url = format!("{}/users/{username}/repos", self.api_url);
        self.get_json(&url).await
    }

    /// Search for usernames matching a partial query.
    pub async fn search_users(&self, query: &str) -> GithubResult<Vec<UserSuggestion>> {
        let url = format!(
            "{}/search/users?q={}",
            self.api_url,
            urlencoding::encode(query)
        );
        let response: SearchUsersResponse = self.get_json(&url).await?;
        Ok(response.items)
    }

    /// List the recursive tree of a repository at HEAD.
    pub async fn list_tree(&self, owner: &str, repo: &str) -> GithubResult<Vec<TreeEntry>> {
        let url = format!(
            "{}/repos/{owner}/{repo}/git/trees/HEAD?recursive=1",
            self.api_url
        );
        let response: GitTreeResponse = self.get_json(&url).await?;
        Ok(response.tree)
    }

    /// Fetch the raw content of a file at HEAD.
    pub async fn raw_file(&self, owner: &str, repo: &str, path: &str) -> GithubResult<String> {
        let url = format!("{}/{owner}/{repo}/HEAD/{path}", self.raw_url);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| GithubError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GithubError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| GithubError::Http(e.to_string()))
    }

    /// Fetch and decode the profile README of the repository named after
    /// the user. `Ok(None)` when the user has no such README.
    pub async fn profile_readme(&self, username: &str) -> GithubResult<Option<String>> {
        let url = format!("{}/repos/{username}/{username}/readme", self.api_url);
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| GithubError::Http(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GithubError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let readme: ReadmeResponse = response
            .json()
            .await
            .map_err(|e| GithubError::InvalidResponse(e.to_string()))?;
        decode_readme(&readme.content).map(Some)
    }
}

/// GitHub serves README content base64-encoded with embedded newlines.
fn decode_readme(content: &str) -> GithubResult<String> {
    let compact: String = content.split_whitespace().collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| GithubError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GithubError::Decode(e.to_string()))
}
