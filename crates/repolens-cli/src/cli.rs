//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments for the `repolens` binary.
#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "Browse GitHub repositories and explain their code")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ./repolens.toml, then the user
    /// config directory)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

/// The subcommands of the `repolens` binary.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay server for the explain and summary endpoints
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List a user's repositories, nine per page
    Repos {
        /// GitHub username
        username: String,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Print a repository's file tree
    Tree {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,
    },

    /// Explain a file for a chosen audience
    Explain {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,

        /// Slash-delimited path of the file within the repository
        path: String,

        /// Audience role: intern, newgrad, senior, pm, or designer
        #[arg(short, long, default_value = "intern")]
        role: String,

        /// A specific question about the file
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Summarize a user's profile README
    Summary {
        /// GitHub username
        username: String,
    },
}
