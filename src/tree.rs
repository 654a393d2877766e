//! Huffman tree construction and symbol lookup
//!
//! Nodes are merged greedily through a min-priority queue keyed on
//! `(frequency, sequence)`. Leaves take sequence numbers in frequency-table
//! order and every merged node takes the next free one, so equal-frequency
//! nodes always leave the queue oldest first.

use crate::codes::{self, CodeTable};
use crate::config::HuffmanConfig;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::node::TreeNode;
use crate::stats::{self, TreeStatistics};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug)]
struct QueuedNode<S> {
    frequency: u64,
    sequence: u64,
    node: TreeNode<S>,
}

impl<S> Eq for QueuedNode<S> {}
impl<S> PartialEq for QueuedNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.sequence == other.sequence
    }
}
impl<S> PartialOrd for QueuedNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S> Ord for QueuedNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on (frequency, sequence)
        (other.frequency, other.sequence).cmp(&(self.frequency, self.sequence))
    }
}

/// A built Huffman tree with codes assigned and statistics cached
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    root: TreeNode<S>,
    distinct_symbols: usize,
    statistics: TreeStatistics,
}

impl<S: Eq + Hash + Clone + Debug> HuffmanTree<S> {
    /// Build a tree using the default configuration
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<Self> {
        Self::build_with_config(frequencies, &HuffmanConfig::default())
    }

    pub fn build_with_config(
        frequencies: &FrequencyTable<S>,
        config: &HuffmanConfig,
    ) -> Result<Self> {
        config.validate()?;
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }

        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0u64;
        for (symbol, frequency) in frequencies.iter() {
            heap.push(QueuedNode {
                frequency,
                sequence,
                node: TreeNode::leaf(symbol.clone(), frequency),
            });
            sequence += 1;
        }

        let distinct_symbols = heap.len();
        let mut size = distinct_symbols;

        let mut root = loop {
            let first = heap.pop().ok_or(HuffmanError::EmptyAlphabet)?;
            let Some(second) = heap.pop() else {
                break first.node;
            };
            let node = TreeNode::merge(first.node, second.node)?;
            heap.push(QueuedNode {
                frequency: node.frequency(),
                sequence,
                node,
            });
            sequence += 1;
            size += 1;
        };

        codes::assign_codes(&mut root, &config.single_symbol_code);
        let statistics = stats::compute_statistics(&root, size);

        debug!(
            distinct_symbols,
            size,
            height = statistics.height,
            root_frequency = root.frequency(),
            "built huffman tree"
        );

        Ok(Self {
            root,
            distinct_symbols,
            statistics,
        })
    }

    /// Breadth-first search for the leaf carrying `symbol`
    pub fn find(&self, symbol: &S) -> Option<&TreeNode<S>> {
        let mut queue = VecDeque::new();
        queue.push_back(&self.root);
        while let Some(node) = queue.pop_front() {
            if node.symbol() == Some(symbol) {
                return Some(node);
            }
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
        None
    }

    /// Code assigned to `symbol`
    pub fn get_code(&self, symbol: &S) -> Result<&str> {
        self.find(symbol)
            .and_then(TreeNode::code)
            .ok_or_else(|| HuffmanError::SymbolNotFound(format!("{symbol:?}")))
    }

    /// Codes of every symbol in the tree
    pub fn code_table(&self) -> CodeTable<S> {
        codes::collect_codes(&self.root)
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &TreeNode<S> {
        &self.root
    }

    pub fn distinct_symbols(&self) -> usize {
        self.distinct_symbols
    }

    /// Total node count, leaves plus internal nodes
    pub fn size(&self) -> usize {
        self.statistics.size
    }

    pub fn height(&self) -> usize {
        self.statistics.height
    }

    pub fn average_depth(&self) -> f64 {
        self.statistics.average_depth
    }

    pub fn statistics(&self) -> TreeStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> FrequencyTable<char> {
        FrequencyTable::from_pairs([('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)])
            .unwrap()
    }

    fn check_sums(node: &TreeNode<char>) {
        if let TreeNode::Internal {
            frequency,
            left,
            right,
        } = node
        {
            assert_eq!(*frequency, left.frequency() + right.frequency());
            check_sums(left);
            check_sums(right);
        }
    }

    #[test]
    fn test_empty_alphabet() {
        let result = HuffmanTree::build(&FrequencyTable::<char>::new());
        assert!(matches!(result, Err(HuffmanError::EmptyAlphabet)));
    }

    #[test]
    fn test_textbook_shape() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        assert_eq!(tree.size(), 11);
        assert_eq!(tree.root().frequency(), 100);
        assert_eq!(tree.height(), 4);
        check_sums(tree.root());
    }

    #[test]
    fn test_textbook_codes() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        assert_eq!(tree.get_code(&'f').unwrap(), "1");
        assert_eq!(tree.get_code(&'c').unwrap(), "011");
        assert_eq!(tree.get_code(&'d').unwrap(), "010");
        assert_eq!(tree.get_code(&'e').unwrap(), "000");
        assert_eq!(tree.get_code(&'a').unwrap(), "0011");
        assert_eq!(tree.get_code(&'b').unwrap(), "0010");
    }

    #[test]
    fn test_tie_break_by_insertion_order() {
        let freqs = FrequencyTable::from_pairs([('a', 2), ('b', 2), ('c', 3)]).unwrap();
        let tree = HuffmanTree::build(&freqs).unwrap();
        // a and b merge first (oldest equal-frequency pair), then c beats the 4-node
        assert_eq!(tree.get_code(&'c').unwrap(), "1");
        assert_eq!(tree.get_code(&'a').unwrap(), "01");
        assert_eq!(tree.get_code(&'b').unwrap(), "00");

        let reversed = FrequencyTable::from_pairs([('b', 2), ('a', 2), ('c', 3)]).unwrap();
        let tree = HuffmanTree::build(&reversed).unwrap();
        assert_eq!(tree.get_code(&'b').unwrap(), "01");
        assert_eq!(tree.get_code(&'a').unwrap(), "00");
    }

    #[test]
    fn test_merged_node_yields_to_older_leaf_on_tie() {
        // a+b = 2 ties with leaf c = 2; c was queued first so it leaves first
        let freqs = FrequencyTable::from_pairs([('a', 1), ('b', 1), ('c', 2)]).unwrap();
        let tree = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(tree.get_code(&'c').unwrap(), "1");
        assert_eq!(tree.get_code(&'a').unwrap(), "01");
        assert_eq!(tree.get_code(&'b').unwrap(), "00");
    }

    #[test]
    fn test_single_symbol() {
        let freqs = FrequencyTable::from_pairs([('x', 7)]).unwrap();
        let tree = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.average_depth(), 0.0);
        assert_eq!(tree.get_code(&'x').unwrap(), "0");
    }

    #[test]
    fn test_custom_sentinel() {
        let freqs = FrequencyTable::from_pairs([('x', 7)]).unwrap();
        let config = HuffmanConfig {
            single_symbol_code: "1".into(),
            ..HuffmanConfig::default()
        };
        let tree = HuffmanTree::build_with_config(&freqs, &config).unwrap();
        assert_eq!(tree.get_code(&'x').unwrap(), "1");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = HuffmanConfig {
            single_symbol_code: String::new(),
            ..HuffmanConfig::default()
        };
        let result = HuffmanTree::build_with_config(&textbook(), &config);
        assert!(matches!(result, Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_find_missing_symbol() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        assert!(tree.find(&'z').is_none());
        assert!(matches!(
            tree.get_code(&'z'),
            Err(HuffmanError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn test_find_returns_leaf() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        let node = tree.find(&'e').unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.frequency(), 16);
    }

    #[test]
    fn test_code_table_complete() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        let table = tree.code_table();
        assert_eq!(table.len(), 6);
        for (symbol, code) in &table {
            assert_eq!(tree.get_code(symbol).unwrap(), code);
        }
    }

    #[test]
    fn test_average_depth_over_all_nodes() {
        let tree = HuffmanTree::build(&textbook()).unwrap();
        // depths: 0, 1,1, 2,2, 3,3,3,3, 4,4
        assert!((tree.average_depth() - 26.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_merge_overflow_is_error() {
        let freqs = FrequencyTable::from_pairs([('a', u64::MAX), ('b', 1)]).unwrap();
        let result = HuffmanTree::build(&freqs);
        assert!(matches!(result, Err(HuffmanError::FrequencyOverflow)));
    }

    #[test]
    fn test_largest_summable_counts() {
        let freqs = FrequencyTable::from_pairs([('a', u64::MAX - 1), ('b', 1)]).unwrap();
        let tree = HuffmanTree::build(&freqs).unwrap();
        assert_eq!(tree.root().frequency(), u64::MAX);
    }
}
