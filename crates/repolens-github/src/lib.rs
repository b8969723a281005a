//! # Repolens GitHub Client
//!
//! Typed client for the slice of the GitHub REST API that repolens
//! consumes: repository listings, user search, recursive tree listings,
//! raw file content, and profile READMEs.
//!
//! Responses are deserialized into explicit records at the boundary;
//! malformed upstream payloads surface as [`GithubError::InvalidResponse`]
//! instead of propagating untyped shapes. No retries and no rate-limit
//! handling: every failure is terminal for that request.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod error;
pub mod types;

pub use client::GithubClient;
pub use error::{GithubError, GithubResult};
pub use types::{Repo, RepoOwner, TreeEntry, UserSuggestion};
