//! Repository browser: username suggestions, profile loading, pagination.

use crate::debounce::{Generation, SUGGEST_DEBOUNCE};
use crate::relay::RelayClient;
use repolens_core::paging;
use repolens_github::{GithubClient, Repo};
use std::sync::{Arc, Mutex};

/// Shown in place of a summary when the user has no profile README.
pub const NO_PROFILE_README: &str = "This user has no profile README.";

/// Minimum input length before suggestions are requested.
const SUGGEST_MIN_CHARS: usize = 2;

/// Drives the account-search page: autocomplete suggestions, a user's
/// repository list with its AI profile summary, and pagination over the
/// cached list.
#[derive(Debug, Clone)]
pub struct RepoBrowser {
    github: GithubClient,
    relay: RelayClient,
    repos: Vec<Repo>,
    summary: Option<String>,
    loading: bool,
    suggestions: Arc<Mutex<Vec<String>>>,
    suggest_generation: Generation,
}

impl RepoBrowser {
    /// Create a browser over the given clients.
    pub fn new(github: GithubClient, relay: RelayClient) -> Self {
        Self {
            github,
            relay,
            repos: Vec::new(),
            summary: None,
            loading: false,
            suggestions: Arc::new(Mutex::new(Vec::new())),
            suggest_generation: Generation::new(),
        }
    }

    /// The fetched repository list.
    pub fn repos(&self) -> &[Repo] {
        &self.repos
    }

    /// The profile summary: `None` until a round-trip completes, the
    /// summary text or the no-README message afterwards.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Whether a profile load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current autocomplete suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.lock().unwrap().clone()
    }

    /// React to an autocomplete keystroke.
    ///
    /// Inputs shorter than two characters clear the suggestions without a
    /// request. Otherwise the call waits out the trailing debounce and
    /// fetches matching usernames; a newer keystroke supersedes this one
    /// both before the request fires and after its response arrives, so a
    /// stale response can never overwrite newer suggestions. Search
    /// failures clear the suggestions and are logged, not surfaced.
    pub async fn suggest(&self, partial: &str) {
        // Counted in characters, not bytes, so one multi-byte keystroke
        // does not pass the gate
        if partial.chars().count() < SUGGEST_MIN_CHARS {
            self.suggest_generation.begin();
            self.suggestions.lock().unwrap().clear();
            return;
        }

        let ticket = self.suggest_generation.begin();
        tokio::time::sleep(SUGGEST_DEBOUNCE).await;
        if !ticket.is_current() {
            return;
        }

        let result = self.github.search_users(partial).await;
        if !ticket.is_current() {
            return;
        }

        match result {
            Ok(users) => {
                let logins: Vec<String> = users.into_iter().map(|u| u.login).collect();
                *self.suggestions.lock().unwrap() = logins;
            }
            Err(e) => {
                tracing::warn!(query = partial, error = %e, "user search failed");
                self.suggestions.lock().unwrap().clear();
            }
        }
    }

    /// Load a user's repositories and profile summary.
    ///
    /// The loading flag is set for the whole span and cleared on every
    /// exit path. A failed repository fetch leaves the list empty and the
    /// summary `None`; an account without repositories gets no summary; an
    /// account without a profile README gets the fixed no-README message;
    /// a failed summary relay call leaves the summary `None`.
    pub async fn load_profile(&mut self, username: &str) {
        self.loading = true;
        self.load_profile_inner(username).await;
        self.loading = false;
    }

    async fn load_profile_inner(&mut self, username: &str) {
        self.summary = None;
        self.repos = match self.github.list_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::warn!(username, error = %e, "repository fetch failed");
                Vec::new()
            }
        };
        if self.repos.is_empty() {
            return;
        }

        let readme = match self.github.profile_readme(username).await {
            Ok(readme) => readme,
            Err(e) => {
                tracing::warn!(username, error = %e, "profile README fetch failed");
                return;
            }
        };

        match readme {
            Some(content) => match self.relay.summary(&content).await {
                Ok(summary) => self.summary = Some(summary),
                Err(e) => {
                    tracing::warn!(username, error = %e, "summary relay failed");
                }
            },
            None => self.summary = Some(NO_PROFILE_README.to_string()),
        }
    }

    /// The repositories on 1-based `page`, nine per page. Pure slicing of
    /// the cached list; no re-fetch.
    pub fn page(&self, page: usize) -> &[Repo] {
        paging::paginate(&self.repos, page)
    }

    /// Number of pages for the cached list.
    pub fn page_count(&self) -> usize {
        paging::total_pages(self.repos.len())
    }
}
