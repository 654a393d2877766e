//! Text encoding against a built tree, plus the matching decoder.

use crate::error::{HuffmanError, Result};
use crate::node::TreeNode;
use crate::tree::HuffmanTree;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Encoded text and the sizes needed to report compression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingResult {
    /// Concatenated codes as '0'/'1' characters
    pub bits: String,
    pub symbol_count: usize,
    pub distinct_symbols: usize,
    pub bits_per_symbol: u32,
    /// Size of the same text under an equal-width code
    pub fixed_length_bits: usize,
    pub encoded_bits: usize,
    /// `fixed_length_bits / encoded_bits`; 1.0 when nothing was encoded
    pub compression_ratio: f64,
}

/// Smallest width able to give every symbol a distinct fixed-length code
pub fn bits_per_symbol(distinct_symbols: usize) -> u32 {
    let mut bits = 0u32;
    while (1u128 << bits) < distinct_symbols as u128 {
        bits += 1;
    }
    bits
}

/// Bits needed for `text_len` symbols under a fixed-length code
pub fn fixed_length_size(distinct_symbols: usize, text_len: usize) -> usize {
    bits_per_symbol(distinct_symbols) as usize * text_len
}

/// Encode each symbol of `symbols` in order.
///
/// Codes are looked up in the tree once per distinct symbol and cached.
pub fn encode<S, I>(symbols: I, tree: &HuffmanTree<S>) -> Result<EncodingResult>
where
    S: Eq + Hash + Clone + Debug,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut cache: HashMap<S, &str> = HashMap::new();
    let mut bits = String::new();
    let mut symbol_count = 0usize;

    for item in symbols {
        let symbol = item.borrow();
        let code = match cache.get(symbol) {
            Some(code) => *code,
            None => {
                let code = tree.get_code(symbol)?;
                cache.insert(symbol.clone(), code);
                code
            }
        };
        bits.push_str(code);
        symbol_count += 1;
    }

    let distinct_symbols = tree.distinct_symbols();
    let fixed_length_bits = fixed_length_size(distinct_symbols, symbol_count);
    let encoded_bits = bits.len();
    let compression_ratio = if encoded_bits == 0 {
        1.0
    } else {
        fixed_length_bits as f64 / encoded_bits as f64
    };

    debug!(symbol_count, encoded_bits, fixed_length_bits, "encoded text");

    Ok(EncodingResult {
        bits,
        symbol_count,
        distinct_symbols,
        bits_per_symbol: bits_per_symbol(distinct_symbols),
        fixed_length_bits,
        encoded_bits,
        compression_ratio,
    })
}

/// Encode the characters of a string
pub fn encode_str(text: &str, tree: &HuffmanTree<char>) -> Result<EncodingResult> {
    encode(text.chars(), tree)
}

/// Turns bit strings produced by [`encode`] back into symbols
pub struct Decoder<'t, S> {
    tree: &'t HuffmanTree<S>,
}

impl<'t, S: Clone> Decoder<'t, S> {
    pub fn new(tree: &'t HuffmanTree<S>) -> Self {
        Self { tree }
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let root = self.tree.root();
        let symbols = match root {
            TreeNode::Leaf { symbol, code, .. } => {
                decode_single(symbol, code.as_deref().unwrap_or("0"), bits)?
            }
            TreeNode::Internal { .. } => decode_walk(root, bits)?,
        };
        debug!(bits = bits.len(), symbols = symbols.len(), "decoded text");
        Ok(symbols)
    }
}

impl Decoder<'_, char> {
    pub fn decode_to_string(&self, bits: &str) -> Result<String> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}

fn decode_walk<S: Clone>(root: &TreeNode<S>, bits: &str) -> Result<Vec<S>> {
    let mut out = Vec::new();
    let mut current = root;

    for bit in bits.chars() {
        if let TreeNode::Internal { left, right, .. } = current {
            current = match bit {
                '1' => &**left,
                '0' => &**right,
                other => return Err(HuffmanError::InvalidBit(other)),
            };
        }
        if let TreeNode::Leaf { symbol, .. } = current {
            out.push(symbol.clone());
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(HuffmanError::TruncatedInput {
            consumed: bits.len(),
        });
    }
    Ok(out)
}

fn decode_single<S: Clone>(symbol: &S, code: &str, bits: &str) -> Result<Vec<S>> {
    if let Some(other) = bits.chars().find(|&c| c != '0' && c != '1') {
        return Err(HuffmanError::InvalidBit(other));
    }
    // only '0'/'1' remain, so byte offsets are char offsets
    let mut out = Vec::with_capacity(bits.len() / code.len());
    let mut rest = bits;
    while !rest.is_empty() {
        if rest.len() < code.len() {
            return Err(HuffmanError::TruncatedInput {
                consumed: bits.len() - rest.len(),
            });
        }
        let (chunk, tail) = rest.split_at(code.len());
        if chunk != code {
            return Err(HuffmanError::UnknownCode(chunk.to_string()));
        }
        out.push(symbol.clone());
        rest = tail;
    }
    Ok(out)
}
