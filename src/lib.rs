//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over integer keys, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicates are kept and always
//!    go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree makes no
//! attempt to limit its height, so inserting keys in sorted order gives a height
//! of `N`. BSTs naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::from_keys([10, 8, 6, 14, 16, 12, 11, 9]).unwrap();
//! assert_eq!(tree.count(), 8);
//! assert_eq!(tree.to_string(), "10(8(6() 9() ) 14(12(11() ) 16() ) ) ");
//!
//! // 8 has two children so its predecessor, 6, takes its place.
//! tree.remove(8);
//! assert_eq!(tree.to_string(), "10(6(9() ) 14(12(11() ) 16() ) ) ");
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [6, 9, 10, 11, 12, 14, 16]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod alloc;
pub mod error;
pub mod path;
pub mod tree;

pub use error::TreeError;
pub use path::{Direction, Path};
pub use tree::{Iter, Tree};

/// The type of every key stored in a [`Tree`].
pub type Key = i32;
