//! Password generation settings.
//!
//! Loaded in layers, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. `<config dir>/passgen/settings.toml`
//! 3. environment variables `PASSGEN__<KEY>`, e.g. `PASSGEN__LENGTH=20`

mod file;

use serde::Deserialize;

use crate::history;
use crate::pass::{CharClass, DEFAULT_LENGTH, DEFAULT_MAX_COUNT, GenerationConfig};

pub use file::settings_path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    /// Largest batch a single request may ask for.
    pub max_count: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    /// Replaces the punctuation pool when set.
    pub special_chars: Option<String>,
    /// History file for `--output` without a path.
    pub output_file: String,
    /// Filter directive used when `PASSGEN_LOG` is unset.
    pub log_level: String,
    pub show_entropy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: 1,
            max_count: DEFAULT_MAX_COUNT,
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
            special_chars: None,
            output_file: history::DEFAULT_FILE.to_string(),
            log_level: "warn".to_string(),
            show_entropy: true,
        }
    }
}

impl Settings {
    /// Load from the settings file and environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Settings`] if a source is malformed or the
    /// result fails validation.
    pub fn load() -> crate::Result<Self> {
        file::load(&settings_path())
    }

    /// Enabled classes in canonical order.
    pub fn classes(&self) -> Vec<CharClass> {
        [
            (CharClass::Lowercase, self.lowercase),
            (CharClass::Uppercase, self.uppercase),
            (CharClass::Digit, self.digits),
            (CharClass::Special, self.special),
        ]
        .into_iter()
        .filter_map(|(class, enabled)| enabled.then_some(class))
        .collect()
    }

    /// Generation config seeded from these settings.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            count: self.count,
            max_count: self.max_count,
            classes: self.classes().into_iter().collect(),
            special_chars: self.special_chars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generator_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generation_config(), GenerationConfig::default());
        assert_eq!(settings.output_file, "passwords.txt");
    }

    #[test]
    fn test_classes_follow_toggles() {
        let settings = Settings {
            uppercase: false,
            special: false,
            ..Settings::default()
        };
        assert_eq!(
            settings.classes(),
            vec![CharClass::Lowercase, CharClass::Digit]
        );
    }
}
