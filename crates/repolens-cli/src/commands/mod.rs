//! Subcommand implementations.

pub mod explain;
pub mod repos;
pub mod serve;
pub mod summary;
pub mod tree;
