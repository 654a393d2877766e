//! Symbol frequency tallying
//!
//! Entries keep the order in which each symbol was first seen, so tree
//! construction over the same input always breaks ties the same way.

use crate::error::{HuffmanError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from symbol to occurrence count
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Tally every symbol of a sequence
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.bump(symbol.clone());
        }
        table
    }

    /// Build a table from `(symbol, count)` pairs, accumulating repeated symbols
    pub fn from_pairs<I: IntoIterator<Item = (S, u64)>>(pairs: I) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, count) in pairs {
            table.insert(symbol, count)?;
        }
        Ok(table)
    }

    /// Add `count` occurrences of `symbol`. Zero counts are ignored.
    pub fn insert(&mut self, symbol: S, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        match self.index.get(&symbol) {
            Some(&i) => {
                let entry = &mut self.entries[i].1;
                *entry = entry
                    .checked_add(count)
                    .ok_or(HuffmanError::FrequencyOverflow)?;
            }
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, count));
            }
        }
        Ok(())
    }

    // a single tally can never exceed the number of symbols scanned
    fn bump(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, widened so it cannot overflow
    pub fn total(&self) -> u128 {
        self.entries.iter().map(|(_, count)| u128::from(*count)).sum()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl FrequencyTable<char> {
    /// Tally the characters of a string
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for c in text.chars() {
            table.bump(c);
        }
        table
    }
}

impl<S: Eq + Hash + Clone> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
