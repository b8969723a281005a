use anyhow::Result;
use repolens_config::Config;
use repolens_github::GithubClient;
use repolens_llm::prompts;

const NO_PROFILE_README: &str = "This user has no profile README.";

/// Print a short summary of a user's profile README.
pub async fn execute(config: Config, username: &str) -> Result<()> {
    let github = GithubClient::from_config(&config.github);

    let Some(readme) = github.profile_readme(username).await? else {
        println!("{NO_PROFILE_README}");
        return Ok(());
    };

    let provider = repolens_llm::create_chat_provider(&config.llm)?;
    let summary = provider.complete(&prompts::summary_prompt(&readme)).await?;
    println!("{summary}");
    Ok(())
}
