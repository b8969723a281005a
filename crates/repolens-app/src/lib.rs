//! # Repolens App
//!
//! The client-side half of repolens: stateful components that drive the
//! browsing and chat workflow against the GitHub API and the relay server.
//!
//! - [`RepoBrowser`]: username suggestions (debounced, supersession-safe),
//!   profile loading with README summarization, repository pagination.
//! - [`TreeNavigator`]: expansion state and deterministic rendering of a
//!   repository file tree.
//! - [`ChatWorkspace`]: raw-file loading and the per-file question/answer
//!   transcript.
//! - [`RelayClient`]: HTTP client for the `/api/explain` and `/api/summary`
//!   relay endpoints.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod browser;
pub mod debounce;
pub mod navigator;
pub mod relay;
pub mod workspace;

pub use browser::{RepoBrowser, NO_PROFILE_README};
pub use debounce::{Generation, Ticket, SUGGEST_DEBOUNCE};
pub use navigator::{RowKind, TreeNavigator, TreeRow};
pub use relay::{RelayClient, RelayError};
pub use workspace::{ChatWorkspace, LoadedFile};
