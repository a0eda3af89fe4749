//! Domain entities: core data structures

use std::path::{Path, PathBuf};

use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::error::{DomainError, DomainResult};

/// A node in a planned fixture tree.
///
/// The tree is a pure value: nothing exists on disk until it is handed to
/// the materializer. Children of a directory carry distinct names, so the
/// node name alone identifies an entry within its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// An empty regular file
    File { name: String },
    /// A directory and its planned contents
    Directory {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Entry name, without any path components.
    pub fn name(&self) -> &str {
        match self {
            Self::File { name } | Self::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { children, .. } => children.iter().map(TreeNode::file_count).sum(),
        }
    }

    /// Number of directories in this subtree, counting this node.
    pub fn dir_count(&self) -> usize {
        match self {
            Self::File { .. } => 0,
            Self::Directory { children, .. } => {
                1 + children.iter().map(TreeNode::dir_count).sum::<usize>()
            }
        }
    }

    /// Directory levels in this subtree. A file has depth 0, a leaf
    /// directory depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::File { .. } => 0,
            Self::Directory { children, .. } => {
                1 + children.iter().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Join a node name onto an optional base directory.
///
/// With no base the name is taken relative to the working directory.
pub fn compose_path(base: Option<&Path>, name: &str) -> PathBuf {
    match base {
        Some(base) => base.join(name),
        None => PathBuf::from(name),
    }
}

/// Pool of candidate names for files and directories.
///
/// Construction normalizes the input: names are trimmed, blanks dropped,
/// and duplicates kept once in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let names = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unique()
            .collect();
        Self { names }
    }

    /// Build a pool from line-delimited content, one candidate per line.
    pub fn from_lines(content: &str) -> Self {
        Self::new(content.lines().map(str::to_string))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Draw `count` distinct names, uniformly over all `count`-subsets of
    /// the pool, in random order.
    ///
    /// Fails when the pool is smaller than `count`; a name may still repeat
    /// across separate calls.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> DomainResult<Vec<&str>> {
        if self.names.len() < count {
            return Err(DomainError::InsufficientPool {
                available: self.names.len(),
                required: count,
            });
        }
        Ok(self
            .names
            .choose_multiple(rng, count)
            .map(String::as_str)
            .collect())
    }
}
