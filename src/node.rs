//! Huffman tree nodes

use crate::error::{HuffmanError, Result};

/// A node of a Huffman tree. Each internal node exclusively owns both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<S> {
    Leaf {
        symbol: S,
        frequency: u64,
        code: Option<String>,
    },
    Internal {
        frequency: u64,
        left: Box<TreeNode<S>>,
        right: Box<TreeNode<S>>,
    },
}

impl<S> TreeNode<S> {
    pub fn leaf(symbol: S, frequency: u64) -> Self {
        TreeNode::Leaf {
            symbol,
            frequency,
            code: None,
        }
    }

    /// Join two subtrees; `left` is the one extracted first from the queue.
    pub fn merge(left: Self, right: Self) -> Result<Self> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or(HuffmanError::FrequencyOverflow)?;
        Ok(TreeNode::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn frequency(&self) -> u64 {
        match self {
            TreeNode::Leaf { frequency, .. } => *frequency,
            TreeNode::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Symbol carried by a leaf; internal nodes carry none
    pub fn symbol(&self) -> Option<&S> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Code assigned to a leaf, once codes have been generated
    pub fn code(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { code, .. } => code.as_deref(),
            TreeNode::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&TreeNode<S>> {
        match self {
            TreeNode::Internal { left, .. } => Some(left),
            TreeNode::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&TreeNode<S>> {
        match self {
            TreeNode::Internal { right, .. } => Some(right),
            TreeNode::Leaf { .. } => None,
        }
    }
}
