//! Tree statistics: node count, height and average node depth.
//!
//! The average is taken over every node, internal ones included, with the
//! root at depth 0. This is not the usual average leaf depth (expected code
//! length); consumers that want that metric must compute it separately.

use crate::node::TreeNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeStatistics {
    /// Total nodes, leaves plus internal
    pub size: usize,
    /// Greatest depth of any node
    pub height: usize,
    /// Sum of all node depths divided by `size`
    pub average_depth: f64,
}

/// Running totals of a depth-first walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthAggregate {
    pub nodes: usize,
    pub depth_sum: usize,
    pub max_depth: usize,
}

impl DepthAggregate {
    fn combine(self, other: Self) -> Self {
        Self {
            nodes: self.nodes + other.nodes,
            depth_sum: self.depth_sum + other.depth_sum,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

/// Walk the subtree rooted at `node`, which sits at `depth`
pub fn aggregate_depths<S>(node: &TreeNode<S>, depth: usize) -> DepthAggregate {
    let own = DepthAggregate {
        nodes: 1,
        depth_sum: depth,
        max_depth: depth,
    };
    [node.left(), node.right()]
        .into_iter()
        .flatten()
        .fold(own, |acc, child| acc.combine(aggregate_depths(child, depth + 1)))
}

/// Compute statistics for a tree whose node count was tracked while building
pub fn compute_statistics<S>(root: &TreeNode<S>, size: usize) -> TreeStatistics {
    let totals = aggregate_depths(root, 0);
    debug_assert_eq!(totals.nodes, size);
    let average_depth = if size == 0 {
        0.0
    } else {
        totals.depth_sum as f64 / size as f64
    };
    TreeStatistics {
        size,
        height: totals.max_depth,
        average_depth,
    }
}
