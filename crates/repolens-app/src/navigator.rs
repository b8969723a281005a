//! Expansion state and deterministic rendering of a repository file tree.

use repolens_core::{build_tree, join_path, TreeError, TreeNode};
use std::collections::HashMap;

/// What a rendered row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A directory that can be toggled open or closed.
    Directory {
        /// Whether the directory is currently expanded.
        expanded: bool,
    },
    /// A selectable file.
    File,
}

/// One visible line of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Display name (the last path segment).
    pub name: String,
    /// Full slash-joined path from the root.
    pub path: String,
    /// Nesting depth; top-level entries are depth 0.
    pub depth: usize,
    /// Directory or file.
    pub kind: RowKind,
}

/// Walks a built tree, tracking which directories are expanded and
/// producing the flat row list a UI renders.
///
/// Expansion state is keyed by full directory path. Entries for paths no
/// longer present after a rebuild are harmless; they are never read.
#[derive(Debug, Clone)]
pub struct TreeNavigator {
    root: TreeNode,
    expanded: HashMap<String, bool>,
}

impl TreeNavigator {
    /// Wrap an already-built tree. Every directory starts collapsed.
    pub fn new(root: TreeNode) -> Self {
        Self {
            root,
            expanded: HashMap::new(),
        }
    }

    /// Build the tree from blob paths and wrap it.
    pub fn from_paths<I>(paths: I) -> Result<Self, TreeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self::new(build_tree(paths)?))
    }

    /// The underlying tree.
    pub fn tree(&self) -> &TreeNode {
        &self.root
    }

    /// Whether a directory path is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Flip the expansion state of a directory path. Collapsing hides
    /// descendants without destroying their own expansion state.
    pub fn toggle(&mut self, path: &str) {
        let entry = self.expanded.entry(path.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Resolve a selection: the full path when it names a file in the
    /// tree, `None` otherwise. Mutates nothing; the owner reacts to the
    /// returned path.
    pub fn select(&self, path: &str) -> Option<String> {
        let mut node = &self.root;
        for segment in path.split('/') {
            node = node.child(segment)?;
        }
        match node {
            TreeNode::Leaf => Some(path.to_string()),
            TreeNode::Directory(_) => None,
        }
    }

    /// Render the visible rows. Deterministic for a given tree and
    /// expansion state: directories first at each level (in builder
    /// insertion order, not sorted), then files; collapsed subtrees are
    /// skipped.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut out = Vec::new();
        self.walk(&self.root, "", 0, &mut out);
        out
    }

    fn walk(&self, node: &TreeNode, prefix: &str, depth: usize, out: &mut Vec<TreeRow>) {
        for (name, child) in node.entries().iter().filter(|(_, c)| c.is_dir()) {
            let path = join_path(prefix, name);
            let expanded = self.is_expanded(&path);
            out.push(TreeRow {
                name: name.clone(),
                path: path.clone(),
                depth,
                kind: RowKind::Directory { expanded },
            });
            if expanded {
                self.walk(child, &path, depth + 1, out);
            }
        }
        for (name, _) in node.entries().iter().filter(|(_, c)| !c.is_dir()) {
            out.push(TreeRow {
                name: name.clone(),
                path: join_path(prefix, name),
                depth,
                kind: RowKind::File,
            });
        }
    }
}
