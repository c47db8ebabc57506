//! Error types for tree operations

use std::fmt;

/// Errors raised while attaching nodes to an existing tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// `append_child` was asked to descend into a node that has no children
    NoOpenChild {
        /// Parent tag at which the descent stopped
        parent: String,
        /// Levels that were still left to descend
        remaining_depth: usize,
    },
    /// A node was placed deeper than the chain of open elements reaches
    DepthOutOfRange { depth: usize, height: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NoOpenChild {
                parent,
                remaining_depth,
            } => write!(
                f,
                "Cannot descend {} more level(s): <{}> has no children",
                remaining_depth, parent
            ),
            TreeError::DepthOutOfRange { depth, height } => write!(
                f,
                "Cannot place an element at depth {} with only {} open element(s)",
                depth, height
            ),
        }
    }
}

impl std::error::Error for TreeError {}
