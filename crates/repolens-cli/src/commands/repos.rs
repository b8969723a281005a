use anyhow::Result;
use repolens_config::Config;
use repolens_core::paging;
use repolens_github::GithubClient;

/// List one page of a user's repositories.
pub async fn execute(config: Config, username: &str, page: usize) -> Result<()> {
    let github = GithubClient::from_config(&config.github);
    let repos = github.list_repos(username).await?;

    if repos.is_empty() {
        println!("{username} has no public repositories.");
        return Ok(());
    }

    for repo in paging::paginate(&repos, page) {
        let stars = repo.stargazers_count.unwrap_or(0);
        match &repo.description {
            Some(description) => println!("{:<40} ★ {:<6} {}", repo.name, stars, description),
            None => println!("{:<40} ★ {}", repo.name, stars),
        }
    }

    println!(
        "\npage {page} of {} ({} repositories)",
        paging::total_pages(repos.len()),
        repos.len()
    );
    Ok(())
}
