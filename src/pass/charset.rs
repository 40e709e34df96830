//! Character classes and pool building for password generation.

use std::collections::BTreeSet;
use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, the default pool for [`CharClass::Special`].
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A category of characters that can be enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digit, Self::Special];

    /// Built-in pool. `Special` may be overridden per config.
    #[must_use]
    pub const fn default_pool(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Special => PUNCTUATION,
        }
    }

    /// Label used in prompts, e.g. `Lowercase (a-z)`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lowercase => "Lowercase (a-z)",
            Self::Uppercase => "Uppercase (A-Z)",
            Self::Digit => "Digits (0-9)",
            Self::Special => "Special (!@#$%)",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lowercase => write!(f, "lowercase"),
            Self::Uppercase => write!(f, "uppercase"),
            Self::Digit => write!(f, "digit"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// Per-class pools for one batch, in class order.
#[derive(Debug, Clone)]
pub struct Charset {
    pools: Vec<(CharClass, Vec<char>)>,
}

impl Charset {
    /// Build pools for `classes`, using `special` for the special class.
    pub fn build(classes: &BTreeSet<CharClass>, special: &str) -> Self {
        let pools = classes
            .iter()
            .map(|&class| {
                let chars = match class {
                    CharClass::Special => special.chars().collect(),
                    other => other.default_pool().chars().collect(),
                };
                (class, chars)
            })
            .collect();
        Self { pools }
    }

    /// Pools in class order, one per enabled class.
    pub fn pools(&self) -> impl Iterator<Item = &[char]> {
        self.pools.iter().map(|(_, chars)| chars.as_slice())
    }

    pub fn pool(&self, class: CharClass) -> Option<&[char]> {
        self.pools
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, chars)| chars.as_slice())
    }

    /// Number of enabled classes.
    pub fn class_count(&self) -> usize {
        self.pools.len()
    }

    /// Concatenation of every pool. Characters shared by two pools appear
    /// twice and are weighted accordingly.
    pub fn combined(&self) -> Vec<char> {
        self.pools.iter().flat_map(|(_, chars)| chars.iter().copied()).collect()
    }

    /// Size of the combined pool (for entropy calculation).
    pub fn size(&self) -> usize {
        self.pools.iter().map(|(_, chars)| chars.len()).sum()
    }

    /// True if `c` belongs to any enabled pool.
    pub fn contains(&self, c: char) -> bool {
        self.pools.iter().any(|(_, chars)| chars.contains(&c))
    }
}
