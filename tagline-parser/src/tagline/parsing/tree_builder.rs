//! Tree Builder - Builds the element forest from depth-tagged nodes
//!
//! The builder keeps an owning stack of the elements on the current path,
//! indexed by depth: `open[0]` is the newest root, `open[d]` the element at
//! depth `d` below it. Placing a node at depth `d` first closes everything at
//! depth `d` or deeper, then opens the new node on top.
//!
//! Closing a node hands it to its parent (the new top of the stack), or to the
//! root list once the stack is empty. Children therefore reach their parent
//! in source order, and nothing ever has to walk down an ownership chain.

use crate::tagline::ast::{MarkupNode, TreeError};

/// Incremental builder for one parse
#[derive(Debug, Default)]
pub struct TreeBuilder {
    roots: Vec<MarkupNode>,
    open: Vec<MarkupNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open elements, which is also one past the deepest depth a
    /// new node may be placed at.
    pub fn height(&self) -> usize {
        self.open.len()
    }

    /// Open `node` at `depth`, closing every element at that depth or deeper.
    ///
    /// Depth 0 starts a new root. Depths above [`height`](Self::height) have no
    /// parent to attach to and are rejected.
    pub fn place(&mut self, depth: usize, node: MarkupNode) -> Result<(), TreeError> {
        let height = self.height();
        if depth > height {
            return Err(TreeError::DepthOutOfRange { depth, height });
        }
        self.close_to(depth);
        self.open.push(node);
        Ok(())
    }

    /// Close everything and return the roots in source order.
    pub fn finish(mut self) -> Vec<MarkupNode> {
        self.close_to(0);
        self.roots
    }

    fn close_to(&mut self, len: usize) {
        while self.open.len() > len {
            let Some(node) = self.open.pop() else {
                break;
            };
            match self.open.last_mut() {
                Some(parent) => parent.push_child(node),
                None => self.roots.push(node),
            }
        }
    }
}
