//! Generation parameters and their validation.

use std::collections::BTreeSet;

use super::charset::{CharClass, Charset, PUNCTUATION};
use super::entropy;
use crate::error::{Error, Result};

/// Default password length.
pub const DEFAULT_LENGTH: usize = 12;
/// Default upper bound on passwords per batch.
pub const DEFAULT_MAX_COUNT: usize = 10;

/// Immutable input to one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Requested length; widened to the class count when shorter.
    pub length: usize,
    /// Passwords per batch.
    pub count: usize,
    /// Application policy bound on `count`.
    pub max_count: usize,
    pub classes: BTreeSet<CharClass>,
    /// Replacement pool for [`CharClass::Special`].
    pub special_chars: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: 1,
            max_count: DEFAULT_MAX_COUNT,
            classes: CharClass::ALL.into_iter().collect(),
            special_chars: None,
        }
    }
}

impl GenerationConfig {
    /// All classes enabled, default special set.
    #[must_use]
    pub fn new(length: usize, count: usize) -> Self {
        Self {
            length,
            count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = CharClass>) -> Self {
        self.classes = classes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_special_chars(mut self, chars: impl Into<String>) -> Self {
        self.special_chars = Some(chars.into());
        self
    }

    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Check every constraint before any randomness is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] with the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::invalid("select at least one character class"));
        }
        if self.special_chars.as_deref() == Some("") {
            return Err(Error::invalid(
                "custom special characters cannot be empty",
            ));
        }
        if self.length == 0 {
            return Err(Error::invalid("length must be a positive number"));
        }
        if self.count == 0 {
            return Err(Error::invalid(
                "number of passwords must be a positive number",
            ));
        }
        if self.count > self.max_count {
            return Err(Error::invalid(format!(
                "at most {} passwords can be generated at once (requested {})",
                self.max_count, self.count
            )));
        }
        Ok(())
    }

    /// Pool used for the special class.
    pub fn special_pool(&self) -> &str {
        self.special_chars.as_deref().unwrap_or(PUNCTUATION)
    }

    pub fn charset(&self) -> Charset {
        Charset::build(&self.classes, self.special_pool())
    }

    /// `max(length, enabled classes)`.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.classes.len())
    }

    /// True when the requested length cannot hold one character per class.
    pub fn is_widened(&self) -> bool {
        self.effective_length() > self.length
    }

    /// Estimated entropy of one password in bits.
    pub fn entropy_bits(&self) -> f64 {
        entropy::bits(self.effective_length(), self.charset().size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_invalid(config: &GenerationConfig) -> String {
        match config.validate() {
            Err(Error::InvalidConfig(reason)) => reason,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classes.len(), 4);
        assert_eq!(config.special_pool(), PUNCTUATION);
    }

    #[test]
    fn test_empty_classes_rejected() {
        let config = GenerationConfig::new(12, 1).with_classes(Vec::<CharClass>::new());
        assert!(expect_invalid(&config).contains("character class"));
    }

    #[test]
    fn test_empty_special_override_rejected() {
        let config = GenerationConfig::new(12, 1).with_special_chars("");
        assert!(expect_invalid(&config).contains("special"));
    }

    #[test]
    fn test_zero_length_and_count_rejected() {
        expect_invalid(&GenerationConfig::new(0, 1));
        expect_invalid(&GenerationConfig::new(12, 0));
    }

    #[test]
    fn test_count_above_max_rejected() {
        let config = GenerationConfig::new(12, 11);
        assert!(expect_invalid(&config).contains("at most 10"));

        let config = GenerationConfig::new(12, 10);
        assert!(config.validate().is_ok());

        let config = GenerationConfig::new(12, 11).with_max_count(50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_length() {
        let config = GenerationConfig::new(4, 1);
        assert_eq!(config.effective_length(), 4);
        assert!(!config.is_widened());

        let config = GenerationConfig::new(2, 1);
        assert_eq!(config.effective_length(), 4);
        assert!(config.is_widened());

        let config = GenerationConfig::new(1, 1).with_classes([CharClass::Digit]);
        assert_eq!(config.effective_length(), 1);
    }

    #[test]
    fn test_duplicate_classes_collapse() {
        let config =
            GenerationConfig::new(8, 1).with_classes([CharClass::Digit, CharClass::Digit]);
        assert_eq!(config.classes.len(), 1);
    }
}
