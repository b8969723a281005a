//! Builds a nested directory tree from a flat list of slash-delimited paths.
//!
//! The builder is pure: given the blob paths of a repository tree listing it
//! produces a [`TreeNode::Directory`] whose structure reflects the
//! common-prefix hierarchy of the inputs. Entry order within a directory is
//! insertion order, which downstream rendering relies on.

use thiserror::Error;

/// A node in the in-memory representation of a repository's file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A directory: named children in insertion order.
    Directory(Vec<(String, TreeNode)>),
    /// A file. Carries no payload beyond its existence.
    Leaf,
}

/// Errors from [`build_tree`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A path segment is used as both a directory and a complete file path.
    /// The original data source left this case as a silent overwrite; here
    /// the ambiguous input is rejected outright.
    #[error("path '{path}' is used as both a directory and a file")]
    Collision {
        /// The full path at which the conflict occurred.
        path: String,
    },
}

impl TreeNode {
    /// Whether this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    /// The named children of a directory node, in insertion order.
    pub fn entries(&self) -> &[(String, TreeNode)] {
        match self {
            TreeNode::Directory(entries) => entries,
            TreeNode::Leaf => &[],
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.entries()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Full slash-joined paths of every leaf under this node, depth-first in
    /// insertion order. For a tree built from collision-free input this
    /// reproduces the input path set.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaves(self, "", &mut out);
        out
    }
}

fn collect_leaves(node: &TreeNode, prefix: &str, out: &mut Vec<String>) {
    for (name, child) in node.entries() {
        let full = join_path(prefix, name);
        match child {
            TreeNode::Leaf => out.push(full),
            TreeNode::Directory(_) => collect_leaves(child, &full, out),
        }
    }
}

/// Join a path prefix and a child name with `/`, leaving a root-level name
/// bare.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Build a directory tree from a flat list of slash-delimited file paths.
///
/// Each path is split on `/`; directories are created for every segment but
/// the last, and the last segment is recorded as a leaf. Paths are expected
/// to be non-empty with single separators; no `.`/`..` normalization is
/// performed. Duplicate paths are idempotent.
pub fn build_tree<I>(paths: I) -> Result<TreeNode, TreeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut root = Vec::new();
    for path in paths {
        let segments: Vec<&str> = path.as_ref().split('/').collect();
        insert(&mut root, &segments, "")?;
    }
    Ok(TreeNode::Directory(root))
}

fn insert(
    entries: &mut Vec<(String, TreeNode)>,
    segments: &[&str],
    parent: &str,
) -> Result<(), TreeError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };
    let full = join_path(parent, segment);
    let existing = entries.iter().position(|(name, _)| name == segment);

    if rest.is_empty() {
        return match existing {
            None => {
                entries.push(((*segment).to_string(), TreeNode::Leaf));
                Ok(())
            }
            Some(i) => match entries[i].1 {
                TreeNode::Leaf => Ok(()),
                TreeNode::Directory(_) => Err(TreeError::Collision { path: full }),
            },
        };
    }

    let i = match existing {
        Some(i) => i,
        None => {
            entries.push(((*segment).to_string(), TreeNode::Directory(Vec::new())));
            entries.len() - 1
        }
    };
    match &mut entries[i].1 {
        TreeNode::Directory(children) => insert(children, rest, &full),
        TreeNode::Leaf => Err(TreeError::Collision { path: full }),
    }
}
