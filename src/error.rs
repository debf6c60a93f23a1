//! Errors surfaced by [`Tree`][crate::Tree] operations.

use thiserror::Error;

use crate::Key;

/// Something went wrong while mutating a [`Tree`][crate::Tree]. The tree is left exactly as it
/// was before the failing call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The allocator couldn't provide memory for a new node.
    #[error("not enough memory to insert key {key}")]
    OutOfMemory {
        /// The key whose node couldn't be allocated.
        key: Key,
    },
}
