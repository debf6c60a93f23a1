//! An unbalanced, mutable BST over [`Key`]s. Nodes own their children through
//! `Option<Box<Node>>` slots so every structural change is a move of a subtree from one slot to
//! another.
//!
//! Nothing is rebalanced: inserting keys in sorted order builds a tree that is really a linked
//! list, and every operation degrades to `O(n)`. All traversals use an explicit stack instead of
//! recursion so such trees don't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.exists(1));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.exists(1));
//!
//! // Equal keys are kept, they land in the right subtree.
//! tree.insert(1).unwrap();
//! assert_eq!(tree.count(), 2);
//!
//! // Removing takes out one node at a time.
//! assert!(tree.remove(1));
//! assert_eq!(tree.count(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::alloc::try_box;
use crate::error::TreeError;
use crate::path::{Direction, Path};
use crate::Key;

/// A slot that may hold a subtree: the root of a [`Tree`] or a child of a [`Node`].
type Link = Option<Box<Node>>;

/// A Binary Search Tree of [`Key`]s. Keys smaller than a node's key live in its left subtree,
/// keys greater than or equal to it live in its right subtree.
pub struct Tree {
    root: Link,
}

pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn child_mut(&mut self, direction: Direction) -> &mut Link {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub(crate) fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub(crate) fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// How many of the two child slots are occupied.
    pub(crate) fn children(&self) -> usize {
        usize::from(self.has_left()) + usize::from(self.has_right())
    }
}

/// The shape of a node at the moment it's removed. Only used to describe the removal in logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Removal {
    Leaf,
    OnlyLeft,
    OnlyRight,
    TwoChildren,
}

impl Removal {
    fn of(node: &Node) -> Self {
        match node.children() {
            0 => Self::Leaf,
            2 => Self::TwoChildren,
            _ if node.has_left() => Self::OnlyLeft,
            _ => Self::OnlyRight,
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Detach children before each node is dropped so dropping a `Box<Node>` never recurses.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the tree as nested brackets. Each node writes its key and an opening parenthesis,
/// then its left subtree, then its right subtree, then `") "`. Empty subtrees write nothing.
///
/// # Examples
///
/// ```
/// use int_bst::Tree;
///
/// let tree = Tree::from_keys([10, 8, 14, 9]).unwrap();
/// assert_eq!(tree.to_string(), "10(8(9() ) 14() ) ");
/// assert_eq!(Tree::new().to_string(), "");
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Open(&'a Node),
            Close,
        }

        let mut stack: Vec<Step<'_>> = self.root.as_deref().map(Step::Open).into_iter().collect();
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node) => {
                    write!(f, "{}(", node.key)?;
                    stack.push(Step::Close);
                    // Pushed right first so the left subtree is written first.
                    stack.extend(node.right.as_deref().map(Step::Open));
                    stack.extend(node.left.as_deref().map(Step::Open));
                }
                Step::Close => f.write_str(") ")?,
            }
        }
        Ok(())
    }
}

impl Tree {
    /// Generates a new, empty `Tree`. No memory is allocated until the first insert.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting `keys` one after another, in iteration order. The shape of the
    /// tree depends on that order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] hit while inserting. The partially built tree is dropped.
    pub fn from_keys<I>(keys: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = Key>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` at the first empty slot found by descending left for smaller keys and right
    /// otherwise. Duplicate keys are allowed and end up in the right subtree of their equal.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfMemory`] if the new node couldn't be allocated. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// assert!(tree.exists(1));
    /// assert!(tree.exists(2));
    /// assert!(!tree.exists(3));
    /// ```
    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        let node = try_box(Node::new(key)).map_err(|_| TreeError::OutOfMemory { key })?;
        *slot = Some(node);
        trace!(key, depth, "inserted");
        Ok(())
    }

    /// Whether some node holds `key`.
    pub fn exists(&self, key: Key) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Finds the shallowest node holding `key` and returns the way to reach it from the root. If
    /// no node has the key, `None` is returned.
    pub fn search(&self, key: Key) -> Option<Path> {
        let mut path = Path::root();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => {
                    path.push(Direction::Left);
                    node.left.as_deref()
                }
                Ordering::Equal => return Some(path),
                Ordering::Greater => {
                    path.push(Direction::Right);
                    node.right.as_deref()
                }
            };
        }
        None
    }

    /// The number of keys in the tree, duplicates included. This walks every node.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// How many levels are in the tree. An empty tree has height 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// // Sorted input degenerates into a list.
    /// let tree = Tree::from_keys(0..10).unwrap();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left.as_deref().map(|n| (n, level + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        height
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Removes the node holding `key`, returning whether there was one. If several nodes hold
    /// `key`, the one closest to the root goes.
    ///
    /// A node with a single child is replaced by that child. A node with two children is replaced
    /// by its in-order predecessor (the largest key of its left subtree), which first hands its
    /// own left subtree to its former parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys([2, 1, 3]).unwrap();
    ///
    /// assert!(tree.remove(2));
    /// assert_eq!(tree.to_string(), "1(3() ) ");
    ///
    /// // Removing again is a no-op.
    /// assert!(!tree.remove(2));
    /// ```
    pub fn remove(&mut self, key: Key) -> bool {
        let Some(path) = self.search(key) else {
            trace!(key, "not found, nothing removed");
            return false;
        };
        let slot = follow(&mut self.root, path.steps())
            .expect("A searched path leads to a slot");
        let mut removed = slot.take().expect("A searched path ends at a node");

        let case = Removal::of(&removed);
        *slot = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => Some(splice_predecessor(left, right)),
        };
        debug!(key, %path, depth = path.depth(), ?case, "removed");
        true
    }

    /// Writes a newline followed by the bracketed rendering of the tree (see the [`Display`]
    /// implementation) to `out`.
    ///
    /// [`Display`]: fmt::Display
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_keys([2, 1]).unwrap();
    /// let mut out = Vec::new();
    /// tree.write_to(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"\n2(1() ) ");
    /// ```
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\n{}", self)
    }

    /// Like [`write_to`][Self::write_to], writing to standard output.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }
}

/// Walks `steps` down from `slot` and returns the slot reached, or `None` if the steps run off
/// the bottom of the tree.
fn follow<'a>(mut slot: &'a mut Link, steps: &[Direction]) -> Option<&'a mut Link> {
    for &direction in steps {
        slot = slot.as_mut()?.child_mut(direction);
    }
    Some(slot)
}

/// Builds the subtree replacing a removed node whose children were `left` and `right`.
///
/// The predecessor is the shallowest node holding the largest key of `left`. It's detached and
/// its own left subtree moves into the slot it leaves behind. When the predecessor is `left`
/// itself that slot is the top of `left`, so the predecessor simply keeps its left subtree.
///
/// ```text
///        removed               pred
///        /     \              /    \
///      left    right  ->   left    (copies of pred)
///     /    \              /    \       \
///   ...    ...          ...    ...     right
///            \                   \
///            pred           pred.left
///            /   \
///    pred.left   (copies of pred)
/// ```
///
/// Copies of the predecessor's key can only sit in its right subtree, which it keeps. The
/// removed node's `right` hangs off the end of that subtree, so every key left of the
/// predecessor stays strictly smaller than it.
fn splice_predecessor(left: Box<Node>, right: Box<Node>) -> Box<Node> {
    let mut left = Some(left);
    let to_predecessor = Path::to_largest(left.as_deref());
    let mut predecessor = follow(&mut left, to_predecessor.steps())
        .and_then(|slot| {
            let mut predecessor = slot.take()?;
            *slot = predecessor.left.take();
            Some(predecessor)
        })
        .expect("A non-empty subtree has a largest key");
    predecessor.left = left;

    let mut tail = &mut predecessor.right;
    while let Some(node) = tail {
        tail = &mut node.right;
    }
    *tail = Some(right);
    predecessor
}

/// An in-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.key)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
