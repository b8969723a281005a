use anyhow::{anyhow, Result};
use repolens_config::Config;
use repolens_core::Role;
use repolens_github::GithubClient;
use repolens_llm::prompts;

/// Fetch a file and print an explanation for the chosen audience.
pub async fn execute(
    config: Config,
    owner: &str,
    repo: &str,
    path: &str,
    role: &str,
    question: Option<String>,
) -> Result<()> {
    let role: Role = role.parse().map_err(|_| {
        anyhow!(
            "invalid role {role:?}; expected one of: {}",
            Role::ALL.map(|r| r.as_str()).join(", ")
        )
    })?;

    let github = GithubClient::from_config(&config.github);
    let code = github.raw_file(owner, repo, path).await?;
    tracing::debug!(owner, repo, path, bytes = code.len(), "fetched file");

    let provider = repolens_llm::create_chat_provider(&config.llm)?;

    let mut prompt = prompts::explain_prompt(role, &code);
    if let Some(question) = question {
        prompt.push_str("\n\nQuestion:\n");
        prompt.push_str(&question);
    }

    let explanation = provider.complete(&prompt).await?;
    println!("{explanation}");
    Ok(())
}
