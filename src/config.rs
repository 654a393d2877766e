//! Configuration for huffcode

use crate::error::{HuffmanError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HuffmanConfig {
    /// Code given to the only leaf of a one-symbol alphabet.
    pub single_symbol_code: String,
    pub max_input_symbols: usize,
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            single_symbol_code: "0".to_string(),
            max_input_symbols: 100 * 1024 * 1024, // 100M symbols
        }
    }
}

impl HuffmanConfig {
    /// Reject settings the tree and codec cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.single_symbol_code.is_empty() {
            return Err(HuffmanError::InvalidConfig(
                "single_symbol_code must not be empty".into(),
            ));
        }
        if let Some(c) = self
            .single_symbol_code
            .chars()
            .find(|&c| c != '0' && c != '1')
        {
            return Err(HuffmanError::InvalidConfig(format!(
                "single_symbol_code contains non-binary character {c:?}"
            )));
        }
        if self.max_input_symbols == 0 {
            return Err(HuffmanError::InvalidConfig(
                "max_input_symbols must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = HuffmanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.single_symbol_code, "0");
    }

    #[test]
    fn test_rejects_empty_sentinel() {
        let config = HuffmanConfig {
            single_symbol_code: String::new(),
            ..HuffmanConfig::default()
        };
        assert!(matches!(config.validate(), Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_binary_sentinel() {
        let config = HuffmanConfig {
            single_symbol_code: "01x".into(),
            ..HuffmanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HuffmanConfig = serde_json::from_str(r#"{"single_symbol_code":"1"}"#).unwrap();
        assert_eq!(config.single_symbol_code, "1");
        assert_eq!(config.max_input_symbols, HuffmanConfig::default().max_input_symbols);
    }
}
