//! # Repolens Core
//!
//! Pure domain logic for repolens: the path-tree builder, chat transcript
//! types, audience roles, and repository-list pagination.
//!
//! Nothing in this crate performs I/O or depends on an async runtime; the
//! HTTP clients and state machines built on top live in the sibling crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod paging;
pub mod role;
pub mod tree;

pub use chat::{ChatTurn, Speaker, Transcript};
pub use paging::{paginate, total_pages, PAGE_SIZE};
pub use role::{InvalidRole, Role};
pub use tree::{build_tree, join_path, TreeError, TreeNode};
