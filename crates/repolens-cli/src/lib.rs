//! # Repolens CLI
//!
//! The `repolens` binary: run the relay server or drive the browsing and
//! explanation flows directly from the terminal.

#![warn(clippy::all)]

pub mod cli;
pub mod commands;
