//! Code generation: annotates every leaf with its prefix code.
//!
//! Taking the left branch appends '1' and the right branch appends '0'.
//! Decoders built against these codes depend on that orientation.

use crate::node::TreeNode;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from symbol to its bit string
pub type CodeTable<S> = HashMap<S, String>;

/// Assign codes to all leaves below `root`.
///
/// A root that is itself a leaf gets `single_symbol_code`, since no branch
/// is ever taken to reach it.
pub fn assign_codes<S>(root: &mut TreeNode<S>, single_symbol_code: &str) {
    if let TreeNode::Leaf { code, .. } = root {
        *code = Some(single_symbol_code.to_string());
        return;
    }
    assign_prefix(root, String::new());
}

fn assign_prefix<S>(node: &mut TreeNode<S>, prefix: String) {
    match node {
        TreeNode::Leaf { code, .. } => *code = Some(prefix),
        TreeNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('1');
            assign_prefix(left, left_prefix);

            let mut right_prefix = prefix;
            right_prefix.push('0');
            assign_prefix(right, right_prefix);
        }
    }
}

/// Collect the codes already assigned to the leaves of `root`
pub fn collect_codes<S: Eq + Hash + Clone>(root: &TreeNode<S>) -> CodeTable<S> {
    let mut table = HashMap::new();
    collect_into(root, &mut table);
    table
}

fn collect_into<S: Eq + Hash + Clone>(node: &TreeNode<S>, table: &mut CodeTable<S>) {
    match node {
        TreeNode::Leaf {
            symbol,
            code: Some(code),
            ..
        } => {
            table.insert(symbol.clone(), code.clone());
        }
        TreeNode::Leaf { code: None, .. } => {}
        TreeNode::Internal { left, right, .. } => {
            collect_into(left, table);
            collect_into(right, table);
        }
    }
}
