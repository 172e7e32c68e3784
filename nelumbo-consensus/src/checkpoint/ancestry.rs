//! Block ancestry lookups for the checkpoint gate.

use std::collections::HashMap;

use thiserror::Error;

use nelumbo_chain::{block, parameters::GENESIS_PREVIOUS_BLOCK_HASH};

/// The ancestry capability the checkpoint gate relies on.
///
/// Implementations must answer from a consistent view of the chain: the gate
/// issues exactly one query per classification, so a consistent index gives
/// consistent dispositions.
pub trait AncestryIndex {
    /// Returns `true` if `ancestor` is `descendant`, or one of the blocks
    /// `descendant` builds on.
    ///
    /// Hashes that are not in the index are nobody's ancestor.
    fn is_ancestor(&self, ancestor: block::Hash, descendant: block::Hash) -> bool;
}

/// An in-memory forest of block headers, indexed for ancestry walks.
///
/// Side chains are kept alongside the best chain, so the index is a forest
/// of trees rather than a single path. Each node records an arena index for
/// its parent, so ancestry walks follow plain `usize` links without hashing
/// or allocating.
#[derive(Clone, Debug, Default)]
pub struct BlockIndex {
    /// The arena of tree nodes, in insertion order.
    nodes: Vec<IndexNode>,

    /// The arena position of each known block.
    by_hash: HashMap<block::Hash, usize>,
}

/// One block in a [`BlockIndex`].
#[derive(Clone, Debug)]
struct IndexNode {
    /// The arena position of the parent block, or `None` for tree roots.
    parent: Option<usize>,

    /// The block's height: zero for roots, one more than the parent
    /// otherwise.
    height: block::Height,
}

/// Errors adding blocks to a [`BlockIndex`].
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum AncestryError {
    /// The parent of the new block is not in the index.
    #[error("parent block {0:?} is not in the index")]
    UnknownParent(block::Hash),

    /// The new block is already in the index.
    #[error("block {0:?} is already in the index")]
    DuplicateBlock(block::Hash),
}

impl BlockIndex {
    /// Returns a new, empty block index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the block `hash`, whose parent is `parent_hash`, and returns its
    /// height.
    ///
    /// Blocks whose parent is the null hash become tree roots at height
    /// zero, following the Bitcoin convention for the parent of a genesis
    /// block. All other parents must already be in the index.
    pub fn insert(
        &mut self,
        hash: block::Hash,
        parent_hash: block::Hash,
    ) -> Result<block::Height, AncestryError> {
        if self.by_hash.contains_key(&hash) {
            Err(AncestryError::DuplicateBlock(hash))?;
        }

        let (parent, height) = if parent_hash == GENESIS_PREVIOUS_BLOCK_HASH {
            (None, block::Height(0))
        } else {
            let parent = *self
                .by_hash
                .get(&parent_hash)
                .ok_or(AncestryError::UnknownParent(parent_hash))?;

            (Some(parent), block::Height(self.nodes[parent].height.0 + 1))
        };

        self.by_hash.insert(hash, self.nodes.len());
        self.nodes.push(IndexNode { parent, height });

        Ok(height)
    }

    /// Returns the height of `hash`, if it is in the index.
    pub fn height(&self, hash: block::Hash) -> Option<block::Height> {
        let index = *self.by_hash.get(&hash)?;

        Some(self.nodes[index].height)
    }
}

impl AncestryIndex for BlockIndex {
    fn is_ancestor(&self, ancestor: block::Hash, descendant: block::Hash) -> bool {
        let (Some(&ancestor_index), Some(&descendant_index)) =
            (self.by_hash.get(&ancestor), self.by_hash.get(&descendant))
        else {
            return false;
        };

        let target_height = self.nodes[ancestor_index].height;

        let mut current = descendant_index;
        loop {
            if current == ancestor_index {
                return true;
            }

            // Heights strictly decrease towards the root, so walking past the
            // target height can never reach the target.
            if self.nodes[current].height <= target_height {
                return false;
            }

            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}
