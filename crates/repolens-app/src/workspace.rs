//! Per-file chat workspace: raw content loading and the question/answer
//! transcript.

use crate::relay::RelayClient;
use repolens_core::{Role, Transcript};
use repolens_github::GithubClient;

/// A file whose raw content has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// Full slash-delimited path within the repository.
    pub path: String,
    /// Raw file content.
    pub content: String,
}

/// The chat workspace for one repository.
///
/// States per instance: idle (no file) → file loaded → asking and back;
/// selecting a new file from any state returns to file-loaded with an
/// empty transcript.
#[derive(Debug, Clone)]
pub struct ChatWorkspace {
    github: GithubClient,
    relay: RelayClient,
    owner: String,
    repo: String,
    role: Role,
    file: Option<LoadedFile>,
    transcript: Transcript,
    pending_question: String,
    asking: bool,
}

impl ChatWorkspace {
    /// Create a workspace for `owner/repo`.
    pub fn new(
        github: GithubClient,
        relay: RelayClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            github,
            relay,
            owner: owner.into(),
            repo: repo.into(),
            role: Role::default(),
            file: None,
            transcript: Transcript::new(),
            pending_question: String::new(),
            asking: false,
        }
    }

    /// The audience role used for explanations.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Change the audience role. The transcript is kept; only future
    /// questions are affected.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// The currently loaded file, if any.
    pub fn file(&self) -> Option<&LoadedFile> {
        self.file.as_ref()
    }

    /// The conversation for the current file.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The question being composed.
    pub fn pending_question(&self) -> &str {
        &self.pending_question
    }

    /// Update the question being composed.
    pub fn set_pending_question(&mut self, text: impl Into<String>) {
        self.pending_question = text.into();
    }

    /// Whether an explain call is in flight.
    pub fn is_asking(&self) -> bool {
        self.asking
    }

    /// Whether the ask button is enabled: a file is loaded, the question
    /// is non-blank, and no call is in flight.
    pub fn can_ask(&self) -> bool {
        self.file.is_some() && !self.pending_question.trim().is_empty() && !self.asking
    }

    /// Select a file: fetch its raw content, then reset the transcript and
    /// pending question. The reset is unconditional; a failed fetch still
    /// clears the conversation and leaves no file loaded, so asking stays
    /// disabled rather than chatting about stale content.
    pub async fn select_file(&mut self, path: &str) {
        let fetched = self.github.raw_file(&self.owner, &self.repo, path).await;
        self.transcript.clear();
        self.pending_question.clear();
        match fetched {
            Ok(content) => {
                self.file = Some(LoadedFile {
                    path: path.to_string(),
                    content,
                });
            }
            Err(e) => {
                tracing::warn!(owner = %self.owner, repo = %self.repo, path, error = %e, "raw content fetch failed");
                self.file = None;
            }
        }
    }

    /// Send the pending question to the explain relay.
    ///
    /// No-op unless [`can_ask`](Self::can_ask). The user turn is appended
    /// before the call resolves; the transcript including that turn is
    /// sent for context. A successful answer is appended as an assistant
    /// turn and the pending question cleared; a relay error is appended as
    /// an assistant turn with an "Error: " prefix and the question kept
    /// for retry.
    pub async fn ask(&mut self) {
        if !self.can_ask() {
            return;
        }
        let question = self.pending_question.clone();
        let code = match &self.file {
            Some(file) => file.content.clone(),
            None => return,
        };

        self.transcript.push_user(question.clone());
        self.asking = true;

        let result = self
            .relay
            .explain(&code, self.role, &self.transcript, &question)
            .await;

        match result {
            Ok(explanation) => {
                self.transcript.push_assistant(explanation);
                self.pending_question.clear();
            }
            Err(e) => {
                self.transcript.push_assistant(format!("Error: {e}"));
            }
        }
        self.asking = false;
    }
}
