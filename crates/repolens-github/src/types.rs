//! Wire records for the GitHub endpoints repolens consumes.
//!
//! Only the fields the application reads are declared; everything else in
//! the upstream payloads is ignored. Required fields missing from a
//! response fail deserialization at the boundary.

use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Numeric repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Owning account.
    pub owner: RepoOwner,
    /// Short description, when set.
    #[serde(default)]
    pub description: Option<String>,
    /// Web URL of the repository.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: Option<u64>,
}

/// The owning account of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    /// Account login.
    pub login: String,
}

/// A username match from `GET /search/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSuggestion {
    /// Account login.
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchUsersResponse {
    pub items: Vec<UserSuggestion>,
}

/// One entry of a recursive git tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Slash-delimited path within the repository.
    pub path: String,
    /// Entry kind: `blob` for files, `tree` for directories.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    /// Whether this entry is a file.
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitTreeResponse {
    pub tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReadmeResponse {
    pub content: String,
}
