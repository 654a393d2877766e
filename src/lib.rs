//! huffcode: Huffman prefix codes for text, with tree statistics.
//!
//! The pipeline runs in fixed order:
//! - tally symbol frequencies
//! - build the tree by greedy minimum-frequency merging
//! - assign codes (left branch '1', right branch '0')
//! - compute tree statistics
//! - encode the text into a '0'/'1' string and size it against a fixed-length code

pub mod codes;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod node;
pub mod stats;
pub mod tree;

pub use crate::codes::CodeTable;
pub use crate::config::HuffmanConfig;
pub use crate::encoder::{Decoder, EncodingResult};
pub use crate::error::{HuffmanError, Result};
pub use crate::frequency::FrequencyTable;
pub use crate::node::TreeNode;
pub use crate::stats::TreeStatistics;
pub use crate::tree::HuffmanTree;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Sizes and tree shape for one encoded text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingReport {
    pub fixed_length_size: usize,
    pub encoded_size: usize,
    pub compression_ratio: f64,
    pub tree_height: usize,
    pub node_count: usize,
    pub average_depth: f64,
}

impl EncodingReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A text encoded together with the tree that produced it
#[derive(Debug, Clone)]
pub struct Encoded {
    pub tree: HuffmanTree<char>,
    pub result: EncodingResult,
}

impl Encoded {
    pub fn bits(&self) -> &str {
        &self.result.bits
    }

    pub fn statistics(&self) -> TreeStatistics {
        self.tree.statistics()
    }

    /// Recover the original text
    pub fn decode(&self) -> Result<String> {
        Decoder::new(&self.tree).decode_to_string(&self.result.bits)
    }

    pub fn report(&self) -> EncodingReport {
        let stats = self.tree.statistics();
        EncodingReport {
            fixed_length_size: self.result.fixed_length_bits,
            encoded_size: self.result.encoded_bits,
            compression_ratio: self.result.compression_ratio,
            tree_height: stats.height,
            node_count: stats.size,
            average_depth: stats.average_depth,
        }
    }
}

/// Runs the whole encoding pipeline for text inputs
pub struct HuffmanCodec {
    config: HuffmanConfig,
}

impl HuffmanCodec {
    /// Create a codec, rejecting an unusable configuration
    pub fn new(config: HuffmanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Build a tree from the text's own frequencies and encode the text with it
    pub fn encode(&self, text: &str) -> Result<Encoded> {
        let limit = self.config.max_input_symbols;
        // bytes bound chars from above, so only long texts pay for a count
        if text.len() > limit {
            let actual = text.chars().count();
            if actual > limit {
                return Err(HuffmanError::InputTooLarge { limit, actual });
            }
        }

        let frequencies = FrequencyTable::from_text(text);
        let tree = HuffmanTree::build_with_config(&frequencies, &self.config)?;
        let result = encoder::encode_str(text, &tree)?;

        info!(
            fixed_length_size = result.fixed_length_bits,
            encoded_size = result.encoded_bits,
            compression_ratio = result.compression_ratio,
            tree_height = tree.height(),
            node_count = tree.size(),
            average_depth = tree.average_depth(),
            "encoded text"
        );

        Ok(Encoded { tree, result })
    }
}

impl Default for HuffmanCodec {
    fn default() -> Self {
        Self {
            config: HuffmanConfig::default(),
        }
    }
}
