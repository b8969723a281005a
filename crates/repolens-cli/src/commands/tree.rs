use anyhow::Result;
use repolens_config::Config;
use repolens_core::{build_tree, TreeNode};
use repolens_github::GithubClient;

/// Print a repository's file tree, fully expanded.
pub async fn execute(config: Config, owner: &str, repo: &str) -> Result<()> {
    let github = GithubClient::from_config(&config.github);
    let entries = github.list_tree(owner, repo).await?;

    let paths: Vec<String> = entries
        .into_iter()
        .filter(|e| e.is_blob())
        .map(|e| e.path)
        .collect();
    let tree = build_tree(&paths)?;

    println!("{owner}/{repo}");
    print_node(&tree, 0);
    Ok(())
}

/// Directories first at each level, then files, both in insertion order.
fn print_node(node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    for (name, child) in node.entries().iter().filter(|(_, c)| c.is_dir()) {
        println!("{indent}{name}/");
        print_node(child, depth + 1);
    }
    for (name, _) in node.entries().iter().filter(|(_, c)| !c.is_dir()) {
        println!("{indent}{name}");
    }
}
