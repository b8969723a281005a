use anyhow::Result;
use clap::Parser;

use repolens_cli::{
    cli::{Cli, Commands},
    commands,
};
use repolens_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = format!(
        "repolens_cli={level},repolens_web={level},repolens_llm={level},repolens_github={level}",
        level = log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => commands::serve::execute(config, host, port).await?,

        Commands::Repos { username, page } => {
            commands::repos::execute(config, &username, page).await?
        }

        Commands::Tree { owner, repo } => commands::tree::execute(config, &owner, &repo).await?,

        Commands::Explain {
            owner,
            repo,
            path,
            role,
            question,
        } => commands::explain::execute(config, &owner, &repo, &path, &role, question).await?,

        Commands::Summary { username } => commands::summary::execute(config, &username).await?,
    }

    Ok(())
}
