//! Explicit records of how to reach a node from the root of a [`Tree`][crate::Tree].
//!
//! A [`Path`] is what [`Tree::search`][crate::Tree::search] hands back instead of a pointer to the
//! node and its parent. Because it's plain data it can be inspected, and `remove` can follow it
//! again with a mutable borrow to reach the exact slot holding the node.

use std::fmt;

/// Which child slot of a node to descend into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The subtree of smaller keys.
    Left,
    /// The subtree of greater or equal keys.
    Right,
}

/// The sequence of [`Direction`]s taken from the root to reach a node. The root itself has an
/// empty path.
///
/// # Examples
///
/// ```
/// use int_bst::{Direction, Tree};
///
/// let tree = Tree::from_keys([10, 8, 9]).unwrap();
/// let path = tree.search(9).unwrap();
///
/// assert_eq!(path.steps(), &[Direction::Left, Direction::Right]);
/// assert_eq!(path.last(), Some(Direction::Right));
/// assert!(tree.search(10).unwrap().is_root());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Direction>,
}

impl Path {
    /// The path to the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds the path of `Right` steps from the top of `subtree` to the shallowest node holding
    /// its largest key. Keys never decrease along the right spine, so that node starts the final
    /// run of equal keys and every copy of the largest key lives in its right subtree.
    pub(crate) fn to_largest(subtree: Option<&crate::tree::Node>) -> Self {
        let mut steps = 0;
        let mut run_start = 0;
        let mut previous = subtree.map(|n| n.key);
        let mut current = subtree.and_then(|n| n.right.as_deref());
        while let Some(node) = current {
            steps += 1;
            if Some(node.key) != previous {
                run_start = steps;
                previous = Some(node.key);
            }
            current = node.right.as_deref();
        }
        Self {
            steps: vec![Direction::Right; run_start],
        }
    }

    /// The directions taken, starting at the root.
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// How many edges separate the node from the root.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Whether this path leads to the root.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The slot of its parent that holds the node, or `None` for the root.
    pub fn last(&self) -> Option<Direction> {
        self.steps.last().copied()
    }

    pub(crate) fn push(&mut self, direction: Direction) {
        self.steps.push(direction);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match step {
                Direction::Left => f.write_str("L")?,
                Direction::Right => f.write_str("R")?,
            }
        }
        Ok(())
    }
}
