//! Path-keyed tree store.
//!
//! A [`PathTree`] maps slash-delimited paths (`"a/b/c"`) to values of any
//! type. Every node is itself a tree, so a lookup partway down yields a
//! sub-tree that supports the same operations:
//!
//! ```
//! use quill::tree::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.insert("post/first.html", "First!");
//! tree.insert("tag/rust/index.html", "Rust posts");
//!
//! assert_eq!(tree.get("post/first.html"), Ok(&"First!"));
//! assert_eq!(tree.subtree("tag").unwrap().get("rust/index.html"), Ok(&"Rust posts"));
//! ```
//!
//! ## Path normalization
//!
//! Paths are split on `/` and empty segments are discarded, so
//! `"/a//b/"` and `"a/b"` address the same node. An all-empty path
//! normalizes to the single empty segment `""`, which is an addressable
//! key like any other.
//!
//! ## Ordering
//!
//! Children keep their first-insertion order ([`IndexMap`]), so
//! [`PathTree::paths`] enumerates deterministically: depth-first, siblings
//! in the order they were first created. Removal uses shifting so the
//! order of surviving siblings is unchanged.
//!
//! A node may hold both a value and children — storing at `"a"` and at
//! `"a/b"` keeps both.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("nothing stored at path: {0}")]
    NotFound(String),
}

/// A recursive key-value store keyed by slash-delimited paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree<T> {
    value: Option<T>,
    children: IndexMap<String, PathTree<T>>,
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PathTree<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            children: IndexMap::new(),
        }
    }

    /// Split a path into its non-empty segments.
    ///
    /// An all-empty path (`""`, `"/"`, `"///"`) becomes the single empty
    /// segment so it still addresses exactly one child slot.
    fn split_path(path: &str) -> Vec<&str> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() { vec![""] } else { segments }
    }

    /// Store `value` at `path`, creating intermediate nodes as needed.
    ///
    /// Overwrites any value already at that exact path. A subtree below
    /// the path is left untouched.
    pub fn insert(&mut self, path: &str, value: T) {
        let mut node = self;
        for segment in Self::split_path(path) {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(PathTree::new);
        }
        node.value = Some(value);
    }

    fn descend(&self, path: &str) -> Result<&PathTree<T>, TreeError> {
        let mut node = self;
        for segment in Self::split_path(path) {
            node = node
                .children
                .get(segment)
                .ok_or_else(|| TreeError::NotFound(path.to_string()))?;
        }
        Ok(node)
    }

    /// The value stored at `path`.
    ///
    /// Fails if any segment is missing or the terminal node holds no value.
    pub fn get(&self, path: &str) -> Result<&T, TreeError> {
        self.descend(path)?
            .value
            .as_ref()
            .ok_or_else(|| TreeError::NotFound(path.to_string()))
    }

    /// The node at `path` as a sub-tree view.
    ///
    /// The view supports every tree operation, so lookups chain:
    /// `tree.subtree("a")?.get("b/c")` equals `tree.get("a/b/c")`.
    pub fn subtree(&self, path: &str) -> Result<&PathTree<T>, TreeError> {
        self.descend(path)
    }

    /// Remove the node at `path` and everything below it.
    ///
    /// Returns the detached subtree. Surviving siblings keep their order.
    pub fn remove(&mut self, path: &str) -> Result<PathTree<T>, TreeError> {
        let mut segments = Self::split_path(path);
        let last = segments.pop().unwrap_or("");
        let mut node = self;
        for segment in segments {
            node = node
                .children
                .get_mut(segment)
                .ok_or_else(|| TreeError::NotFound(path.to_string()))?;
        }
        node.children
            .shift_remove(last)
            .ok_or_else(|| TreeError::NotFound(path.to_string()))
    }

    /// The value stored directly on this node, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Direct children as `(segment, subtree)` pairs, in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PathTree<T>)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Every path holding a value, `/`-joined, depth-first in
    /// child-insertion order. Stable across repeated calls.
    pub fn paths(&self) -> Vec<String> {
        let mut prefix = Vec::new();
        let mut out = Vec::new();
        self.collect_paths(&mut prefix, &mut out);
        out
    }

    fn collect_paths<'a>(&'a self, prefix: &mut Vec<&'a str>, out: &mut Vec<String>) {
        for (segment, child) in &self.children {
            prefix.push(segment);
            if child.value.is_some() {
                out.push(prefix.join("/"));
            }
            child.collect_paths(prefix, out);
            prefix.pop();
        }
    }

    /// Human-readable dump of every stored path, for diagnostics.
    pub fn render(&self) -> String {
        let mut out = String::from("Site:");
        for path in self.paths() {
            out.push_str("\n    ");
            out.push_str(&path);
        }
        out
    }
}
